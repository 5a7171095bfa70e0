use crate::cli::{
    args::EncodeArgs,
    config::{open_output, read_input, resolve_codec},
    global::GlobalArgs,
};
use hexd::{AlphabetRegistry, IoSink};
use std::io::Write;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    registry: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let codec = if args.upper {
        hexd::UPPER
    } else {
        resolve_codec(registry, args.alphabet.as_deref())?
    };

    let input = read_input(args.file.as_deref(), global)?;

    let mut sink = IoSink::new(open_output(args.output.as_deref())?);
    codec.encoder().encode_to_sink(&input, &mut sink)?;

    let mut writer = sink.into_inner();
    if !args.no_newline {
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    Ok(())
}
