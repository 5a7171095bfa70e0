use crate::cli::{
    args::DecodeArgs,
    config::{open_output, read_input, resolve_codec},
    global::GlobalArgs,
};
use hexd::{AlphabetRegistry, DecodeOptions, IoSink};
use std::io::Write;
use tracing::debug;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = resolve_codec(registry, args.alphabet.as_deref())?;
    let options = DecodeOptions {
        mixed_case: !args.strict && registry.settings.mixed_case(),
    };
    debug!(mixed_case = options.mixed_case, "decoding");

    let input = read_input(args.file.as_deref(), global)?;

    // Surrounding whitespace (e.g. a trailing newline) is not part of the hex text
    let mut sink = IoSink::new(open_output(args.output.as_deref())?);
    codec
        .decoder()
        .decode_to_sink(input.trim_ascii(), &mut sink, options)?;

    sink.into_inner().flush()?;
    Ok(())
}
