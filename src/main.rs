//! `exifrwtool`: a thin CLI collaborator around the `exifrw` library. Prints every tag this
//! crate recognizes (plus opaque entries under the Keep policy) for each file given on the
//! command line. Not part of the round-tripping engine; errors are reported per-file and the
//! tool moves on rather than aborting the whole run.

use exifrw::{Control, IfdId};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: exifrwtool <file> [file...]");
        return ExitCode::FAILURE;
    }

    let mut had_error = false;
    for path in &paths {
        if let Err(e) = dump(path) {
            eprintln!("{path}: {e}");
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn dump(path: &str) -> Result<(), exifrw::ExifError> {
    let control = Control { warn: true, ..Control::default() };
    let desc = exifrw::read(path, control)?;

    println!("{path}:");
    for id in [IfdId::Primary, IfdId::Thumbnail, IfdId::Exif, IfdId::Gps, IfdId::Iop] {
        let Some(ifd) = desc.ifd(id) else { continue };
        for value in ifd.iter() {
            let name = value.name.map(|n| n.human_name().to_string()).unwrap_or_else(|| format!("tag {:#06x}", value.tag));
            println!("  [{id}] {name}: {}", value.readable_string());
        }
    }
    for warning in &desc.warnings {
        eprintln!("  warning: {warning}");
    }
    Ok(())
}
