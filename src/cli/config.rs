use crate::cli::global::GlobalArgs;
use hexd::{AlphabetRegistry, Codec, RegistryError};
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

/// Loads the registry with user overrides, then the `--config` file if one was given.
pub fn load_registry(global: &GlobalArgs) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    let mut registry = AlphabetRegistry::load_with_overrides()?;

    if let Some(path) = &global.config {
        let expanded = shellexpand::tilde(path);
        registry.merge(AlphabetRegistry::load_from_file(Path::new(expanded.as_ref()))?);
    }

    Ok(registry)
}

/// Picks the named alphabet, or the configured default when no name is given.
pub fn resolve_codec(registry: &AlphabetRegistry, name: Option<&str>) -> Result<Codec, RegistryError> {
    match name {
        Some(name) => registry.codec(name),
        None => registry.default_codec(),
    }
}

/// Reads the whole input from a file or stdin, enforcing `--max-size`.
pub fn read_input(
    file: Option<&Path>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let buffer = match file {
        Some(path) => {
            if global.max_size > 0 && !global.force {
                let file_size = fs::metadata(path)?.len() as usize;
                if file_size > global.max_size {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
            fs::read(path)?
        }
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            if global.max_size > 0 && !global.force && buffer.len() > global.max_size {
                return Err(format!(
                    "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
                    buffer.len(),
                    global.max_size
                )
                .into());
            }
            buffer
        }
    };

    debug!(bytes = buffer.len(), "read input");
    Ok(buffer)
}

/// Opens a buffered writer on the output file, or stdout.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(fs::File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
