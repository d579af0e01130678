//! Backup archives of the data directory.
//!
//! `export` bundles the record files into a gzipped tarball named after the
//! current timestamp; `import` restores the known record files from such an
//! archive into the data directory, after which the repositories must be
//! refreshed.

use crate::codec::Record;
use crate::error::{InnkeepError, Result};
use crate::model::{Payment, Room, Tenant};
use chrono::Utc;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Record files bundled by an export.
pub const DATA_FILES: [&str; 3] = [Room::FILE_NAME, Tenant::FILE_NAME, Payment::FILE_NAME];

const ARCHIVE_DIR: &str = "innkeep";

/// Write a timestamped archive of the data files into `out_dir` and return
/// its path. Missing record files are simply not included.
pub fn export_archive(data_dir: &Path, out_dir: &Path) -> Result<PathBuf> {
    let filename = format!("innkeep-{}.tar.gz", Utc::now().format("%Y-%m-%d_%H:%M:%S"));
    let out_path = out_dir.join(filename);
    let file = File::create(&out_path).map_err(InnkeepError::Io)?;
    write_archive(file, data_dir)?;
    Ok(out_path)
}

fn write_archive<W: Write>(writer: W, data_dir: &Path) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for name in DATA_FILES {
        let path = data_dir.join(name);
        if !path.exists() {
            continue;
        }
        let content = fs::read(&path).map_err(InnkeepError::Io)?;

        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();

        tar.append_data(
            &mut header,
            format!("{}/{}", ARCHIVE_DIR, name),
            content.as_slice(),
        )
        .map_err(InnkeepError::Io)?;
    }

    tar.finish().map_err(InnkeepError::Io)?;
    Ok(())
}

/// Restore the known record files from an archive, returning the file names
/// that were written. Entries that are not record files are ignored.
pub fn import_archive(archive: &Path, data_dir: &Path) -> Result<Vec<String>> {
    let file = File::open(archive).map_err(InnkeepError::Io)?;
    let dec = GzDecoder::new(file);
    let mut tar = tar::Archive::new(dec);

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(InnkeepError::Io)?;
    }

    let mut restored = Vec::new();
    for entry in tar.entries().map_err(InnkeepError::Io)? {
        let mut entry = entry.map_err(InnkeepError::Io)?;
        let name = {
            let path = entry.path().map_err(InnkeepError::Io)?;
            match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            }
        };
        if !DATA_FILES.contains(&name.as_str()) {
            continue;
        }

        let mut content = Vec::new();
        entry.read_to_end(&mut content).map_err(InnkeepError::Io)?;
        fs::write(data_dir.join(&name), content).map_err(InnkeepError::Io)?;
        restored.push(name);
    }
    Ok(restored)
}
