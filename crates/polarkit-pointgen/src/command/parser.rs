//! Command line decoding.
//!
//! Each line is a comma-separated field list terminated by a literal `END`
//! token; the first field is the command code. Decoding failures are
//! reported per line and never abort the run.

use polarkit_core::CommandError;

use super::PlotterCommand;

/// Decode one line of the command stream.
///
/// `line_number` is 1-based and is carried into every error for the
/// caller's diagnostics.
pub fn parse_line(line: &str, line_number: u64) -> Result<PlotterCommand, CommandError> {
    let fields: Vec<&str> = line.trim().split(',').map(str::trim).collect();

    // The terminator is mandatory; without it the line shape is untrusted.
    if fields.last() != Some(&"END") {
        return Err(CommandError::MissingTerminator { line_number });
    }
    let fields = &fields[..fields.len() - 1];

    let Some((&code, args)) = fields.split_first() else {
        return Err(CommandError::EmptyCommand { line_number });
    };

    match code {
        "C00" => {
            let [x, y] = parse_args(args, code, line_number)?;
            Ok(PlotterCommand::Rapid { x, y })
        }
        "C01" => {
            let [x, y] = parse_args(args, code, line_number)?;
            Ok(PlotterCommand::Linear { x, y })
        }
        "C02" => {
            let [x, y, i, j] = parse_args(args, code, line_number)?;
            Ok(PlotterCommand::ArcCw { x, y, i, j })
        }
        "C03" => {
            let [x, y, i, j] = parse_args(args, code, line_number)?;
            Ok(PlotterCommand::ArcCcw { x, y, i, j })
        }
        "C05" => {
            let [x, y] = parse_args(args, code, line_number)?;
            Ok(PlotterCommand::Direct { x, y })
        }
        "C10" => {
            parse_args::<0>(args, code, line_number)?;
            Ok(PlotterCommand::PenUp)
        }
        "C11" => {
            parse_args::<0>(args, code, line_number)?;
            Ok(PlotterCommand::PenDown)
        }
        "C90" => {
            parse_args::<0>(args, code, line_number)?;
            Ok(PlotterCommand::Absolute)
        }
        "C91" => {
            parse_args::<0>(args, code, line_number)?;
            Ok(PlotterCommand::Relative)
        }
        _ => Err(CommandError::UnknownCode {
            line_number,
            code: code.to_string(),
        }),
    }
}

/// Check arity and decode every argument as `f64`.
fn parse_args<const N: usize>(
    args: &[&str],
    code: &str,
    line_number: u64,
) -> Result<[f64; N], CommandError> {
    if args.len() != N {
        return Err(CommandError::WrongArgumentCount {
            line_number,
            code: code.to_string(),
        });
    }

    let mut values = [0.0; N];
    for (value, field) in values.iter_mut().zip(args) {
        *value = field.parse().map_err(|_| CommandError::InvalidNumber {
            line_number,
            field: field.to_string(),
        })?;
    }
    Ok(values)
}
