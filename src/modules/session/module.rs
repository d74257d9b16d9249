use crate::app::designer::Designer;
use crate::app::designer_command::DesignerCommand;
use crate::app::error::DesignerSuccess;
use crate::modules::display::sink::DisplaySink;
use std::io::{BufRead, Write};

/// Reads one command per line until `quit` or end of input. Blank lines and
/// lines starting with `#` are skipped. Command errors are reported and the
/// session goes on.
pub fn run_session<D, R, W>(designer: &mut Designer<D>, input: R, output: &mut W) -> std::io::Result<()>
where
    D: DisplaySink,
    R: BufRead,
    W: Write,
{
    log::info!("Session started");

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = line
            .parse::<DesignerCommand>()
            .and_then(|cmd| designer.execute(cmd));

        match result {
            Ok(DesignerSuccess::Quit) => break,
            Ok(DesignerSuccess::Updated) => writeln!(output, "{}", designer.output())?,
            Ok(DesignerSuccess::Message(msg)) => writeln!(output, "{msg}")?,
            Ok(DesignerSuccess::NoChange) => {}
            Err(e) => {
                log::log!(e.get_log_level(), "{}", e.get_info());
                writeln!(output, "Error: {e}")?;
            }
        }
        output.flush()?;
    }

    log::info!("Session ended");
    Ok(())
}
