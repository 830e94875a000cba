//! Decodes a base64 host payload from stdin and prints it as JSON.
//!
//! Usage: cqp-unpack <kind> [--encoding <label>] [--little-endian]
//!
//! Kinds: stranger, member, member-list, group-list, anonymous, file,
//! float-window.

use std::io::Read;
use std::process::ExitCode;

use cqp_api::payload::{decode_record, decode_record_list};
use cqp_api::ApiError;
use cqp_pack::model::{
    AnonymousIdentity, FloatWindow, Group, GroupFile, GroupMember, StrangerInfo,
};
use cqp_pack::{ByteOrder, TextEncoding, WireFormat};

const USAGE: &str = "usage: cqp-unpack <stranger|member|member-list|group-list|anonymous|file|float-window> [--encoding <label>] [--little-endian]";

fn render(kind: &str, text: &str, format: WireFormat) -> Result<serde_json::Value, String> {
    fn json<T: serde::Serialize>(
        value: Result<T, ApiError>,
    ) -> Result<serde_json::Value, String> {
        let value = value.map_err(|e| e.to_string())?;
        serde_json::to_value(value).map_err(|e| e.to_string())
    }
    match kind {
        "stranger" => json(decode_record::<StrangerInfo>(text, format)),
        "member" => json(decode_record::<GroupMember>(text, format)),
        "member-list" => json(decode_record_list::<GroupMember>(text, format)),
        "group-list" => json(decode_record_list::<Group>(text, format)),
        "anonymous" => json(decode_record::<AnonymousIdentity>(text, format)),
        "file" => json(decode_record::<GroupFile>(text, format)),
        "float-window" => json(decode_record::<FloatWindow>(text, format)),
        other => Err(format!("unknown kind `{other}`\n{USAGE}")),
    }
}

fn parse_args(args: &[String]) -> Result<(String, WireFormat), String> {
    let mut kind = None;
    let mut format = WireFormat::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--encoding" => {
                let label = iter.next().ok_or("--encoding needs a label")?;
                let encoding = TextEncoding::for_label(label).map_err(|e| e.to_string())?;
                format = format.with_encoding(encoding);
            }
            "--little-endian" => format = format.with_byte_order(ByteOrder::LittleEndian),
            "-h" | "--help" => return Err(USAGE.to_owned()),
            _ if kind.is_none() => kind = Some(arg.clone()),
            other => return Err(format!("unexpected argument `{other}`\n{USAGE}")),
        }
    }
    let kind = kind.ok_or_else(|| USAGE.to_owned())?;
    Ok((kind, format))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (kind, format) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("failed to read stdin: {err}");
        return ExitCode::FAILURE;
    }

    match render(&kind, &input, format) {
        Ok(value) => {
            match serde_json::to_string_pretty(&value) {
                Ok(out) => println!("{out}"),
                Err(err) => {
                    eprintln!("{err}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(msg) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}
