/// Binary little-endian PLY encoding for fixed-width float records
use crate::error::{FixtureError, Result};
use constants::ply_schema::{
    END_HEADER, FLOAT_TYPE, PLY_FORMAT_LINE, PLY_MAGIC, SPLAT_PROPERTIES, VERTEX_ELEMENT,
};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A row that can be written as a run of f32 values.
pub trait PlyRecord {
    fn fields(&self) -> &[f32];
}

impl<const N: usize> PlyRecord for [f32; N] {
    fn fields(&self) -> &[f32] {
        self
    }
}

/// Ordered property list plus any comment lines for the vertex element.
#[derive(Debug, Clone, PartialEq)]
pub struct PlySchema {
    properties: Vec<String>,
    comments: Vec<String>,
}

impl PlySchema {
    pub fn new<S: Into<String>>(properties: impl IntoIterator<Item = S>) -> Self {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
            comments: Vec::new(),
        }
    }

    /// Position, normal, SH DC, opacity, scale, rotation and lifetime properties.
    pub fn splat_with_lifetime() -> Self {
        Self::new(SPLAT_PROPERTIES)
    }

    /// Adds a `comment` line, written just before `end_header`.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comments.push(comment.into());
        self
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Header text for `vertex_count` rows, every line newline-terminated.
    pub fn header(&self, vertex_count: usize) -> String {
        let mut header = format!("{PLY_MAGIC}\n{PLY_FORMAT_LINE}\n");
        header.push_str(&format!("element {VERTEX_ELEMENT} {vertex_count}\n"));
        for name in &self.properties {
            header.push_str(&format!("property {FLOAT_TYPE} {name}\n"));
        }
        for comment in &self.comments {
            header.push_str(&format!("comment {comment}\n"));
        }
        header.push_str(END_HEADER);
        header.push('\n');
        header
    }

    /// Bytes of one encoded row
    pub fn record_size(&self) -> usize {
        self.property_count() * size_of::<f32>()
    }

    /// Rejects the first record whose width differs from the declared property list.
    pub fn validate<R: PlyRecord>(&self, records: &[R]) -> Result<()> {
        let expected = self.property_count();
        match records
            .iter()
            .enumerate()
            .find(|(_, r)| r.fields().len() != expected)
        {
            Some((record, r)) => Err(FixtureError::SchemaMismatch {
                expected,
                found: r.fields().len(),
                record,
            }),
            None => Ok(()),
        }
    }
}

/// Summary of a completed write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlyWriteStats {
    pub vertex_count: usize,
    pub header_bytes: usize,
    pub body_bytes: usize,
}

impl PlyWriteStats {
    pub fn total_bytes(&self) -> usize {
        self.header_bytes + self.body_bytes
    }
}

/// Writes records under a fixed schema.
#[derive(Debug, Clone)]
pub struct PlyWriter {
    schema: PlySchema,
}

impl PlyWriter {
    pub fn new(schema: PlySchema) -> Self {
        Self { schema }
    }

    /// Validates, then writes header and body to `writer`.
    pub fn write_to<W: Write, R: PlyRecord>(
        &self,
        writer: &mut W,
        records: &[R],
    ) -> Result<PlyWriteStats> {
        self.schema.validate(records)?;
        self.write_unchecked(writer, records)
    }

    /// Validates, then replaces `path` with a complete file via [`write_atomically`].
    pub fn write_file<R: PlyRecord>(&self, path: &Path, records: &[R]) -> Result<PlyWriteStats> {
        self.schema.validate(records)?;
        let stats = write_atomically(path, |writer| self.write_unchecked(writer, records))?;

        tracing::debug!(
            "Wrote {} vertices ({} bytes) to {}",
            stats.vertex_count,
            stats.total_bytes(),
            path.display()
        );
        Ok(stats)
    }

    fn write_unchecked<W: Write, R: PlyRecord>(
        &self,
        writer: &mut W,
        records: &[R],
    ) -> Result<PlyWriteStats> {
        let header = self.schema.header(records.len());
        writer.write_all(header.as_bytes())?;

        let mut row = Vec::with_capacity(self.schema.record_size());
        for record in records {
            row.clear();
            for &value in record.fields() {
                row.extend_from_slice(&value.to_le_bytes());
            }
            writer.write_all(&row)?;
        }

        Ok(PlyWriteStats {
            vertex_count: records.len(),
            header_bytes: header.len(),
            body_bytes: records.len() * self.schema.record_size(),
        })
    }
}

/// Replaces `path` with whatever `write` produces.
///
/// Data goes to a temporary file beside `path` which is synced and renamed over the
/// target only once everything has been written. On error the temporary file is
/// dropped and `path` keeps whatever it held before. A new file gets the same mode as
/// `File::create` would give it; an existing target keeps its mode.
pub fn write_atomically<T>(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<&mut File>) -> Result<T>,
) -> Result<T> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Requested mode is masked by the umask at creation, like File::create.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut temp = builder.tempfile_in(dir)?;
    if let Ok(existing) = fs::metadata(path) {
        temp.as_file().set_permissions(existing.permissions())?;
    }

    let value = {
        let mut writer = BufWriter::new(temp.as_file_mut());
        let value = write(&mut writer)?;
        writer.flush()?;
        value
    };
    temp.as_file().sync_all()?;
    temp.persist(path)?;
    Ok(value)
}
