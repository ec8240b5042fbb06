//! Archive creation for compiled binaries.
//!
//! Each archive holds exactly one entry: the binary, stored under its bare
//! file name. Archives are written to `<name>.partial` and renamed once
//! complete, so a final archive name never points at a truncated file.

use crate::release::{
    descriptor::{ArchiveFormat, BuildDescriptor},
    error::{Error, ErrorExt, Result},
    utils::fs,
};
use flate2::{Compression, write::GzEncoder};
use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// Archives the compiled binary for `descriptor` inside `release_dir`.
///
/// # Returns
///
/// Path of the finished archive.
pub async fn create_archive(descriptor: &BuildDescriptor, release_dir: &Path) -> Result<PathBuf> {
    let binary = descriptor.binary_path(release_dir);
    let partial = descriptor.partial_archive_path(release_dir);
    let archive = descriptor.archive_path(release_dir);
    let entry_name = descriptor.binary_file().to_string();
    let format = descriptor.format();

    log::info!(
        "Archiving {} into {}",
        descriptor.binary_file(),
        descriptor.archive_file()
    );

    // Offload blocking compression to dedicated thread pool
    let written = {
        let binary = binary.clone();
        let partial = partial.clone();
        tokio::task::spawn_blocking(move || match format {
            ArchiveFormat::TarGz => write_tar_gz(&binary, &entry_name, &partial),
            ArchiveFormat::Zip => write_zip(&binary, &entry_name, &partial),
        })
        .await
        .map_err(Error::from)
        .and_then(|r| r)
    };

    if let Err(e) = written {
        fs::remove_file_if_exists(&partial).await?;
        return Err(e);
    }

    tokio::fs::rename(&partial, &archive)
        .await
        .fs_context("moving archive into place", &archive)?;

    Ok(archive)
}

/// Writes a gzip-compressed tarball containing `src` as `entry_name`.
fn write_tar_gz(src: &Path, entry_name: &str, dest: &Path) -> Result<()> {
    let file = File::create(dest).fs_context("creating archive", dest)?;
    let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
    let mut tar = tar::Builder::new(encoder);

    tar.append_path_with_name(src, entry_name)
        .fs_context("adding binary to tarball", src)?;

    let encoder = tar.into_inner().fs_context("writing tarball", dest)?;
    let mut writer = encoder.finish().fs_context("compressing tarball", dest)?;
    io::Write::flush(&mut writer).fs_context("flushing tarball", dest)?;
    Ok(())
}

/// Writes a zip archive containing `src` as `entry_name`, marked executable.
fn write_zip(src: &Path, entry_name: &str, dest: &Path) -> Result<()> {
    let file = File::create(dest).fs_context("creating archive", dest)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);

    zip.start_file(entry_name, options)?;
    let mut input = File::open(src).fs_context("opening binary", src)?;
    io::copy(&mut input, &mut zip).fs_context("adding binary to zip", src)?;

    let mut writer = zip.finish()?;
    io::Write::flush(&mut writer).fs_context("flushing zip", dest)?;
    Ok(())
}
