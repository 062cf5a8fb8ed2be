//! Snapshot files on disk.
//!
//! Writes go to `{path}.tmp`, are flushed with `sync_all()`, then renamed
//! over the final path, so an interrupted write never clobbers the previous
//! snapshot.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub fn write_snapshot(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_path_for(path);
    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

pub fn read_snapshot(path: &Path) -> std::io::Result<Vec<u8>> {
    fs::read(path)
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}
