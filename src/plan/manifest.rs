use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Default manifest location, relative to the working directory
///
/// The same file is rewritten for every video, so two runs must not share a
/// working directory.
pub const DEFAULT_MANIFEST: &str = "filelist.txt";

/// Escape a path for use inside a single-quoted manifest entry
pub fn escape_path(path: &Path) -> String {
    path.display().to_string().replace('\\', "\\\\")
}

/// Absolute form of `clip` for a manifest entry
///
/// ffmpeg resolves relative entries against the manifest's directory, not the
/// working directory, so entries are always written absolute.
pub fn manifest_entry(clip: &Path) -> PathBuf {
    clip.canonicalize()
        .or_else(|_| std::path::absolute(clip))
        .unwrap_or_else(|_| clip.to_path_buf())
}

/// One `file '<path>'` line per clip, in the given order
pub fn render_manifest<'a, I>(clips: I) -> String
where
    I: IntoIterator<Item = &'a Path>,
{
    clips
        .into_iter()
        .map(|clip| format!("file '{}'\n", escape_path(&manifest_entry(clip))))
        .collect()
}

/// Write (truncating) the manifest for `clips` to `manifest_path`
pub fn write_manifest<'a, I>(manifest_path: &Path, clips: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut writer = BufWriter::new(File::create(manifest_path)?);
    writer.write_all(render_manifest(clips).as_bytes())?;
    writer.flush()?;
    Ok(())
}
