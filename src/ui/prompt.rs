use {
    super::UI_TEXT,
    crate::{
        config::SimulationConfig,
        error::{Error, Result},
    },
    std::io::{BufRead, Write},
};

/// Asks for a trial count until the answer is empty (default) or a positive
/// integer. Bad answers print a message and ask again.
///
/// End of input counts as an empty answer.
pub fn ask_trial_count<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u64> {
    loop {
        write!(output, "{}", UI_TEXT.prompt_trials)?;
        output.flush()?;

        let mut line = String::new();
        input.read_line(&mut line)?;

        match SimulationConfig::parse_trials(&line) {
            Ok(trials) => return Ok(trials),
            Err(Error::InvalidTrialCount(text)) => {
                log::debug!("rejected trial count {:?}", text);
                writeln!(output, "{}", UI_TEXT.invalid_trials)?;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ask(script: &str) -> (u64, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let trials = ask_trial_count(&mut input, &mut output).unwrap();
        (trials, String::from_utf8(output).unwrap())
    }

    #[test]
    fn empty_line_defaults() {
        let (trials, _) = ask("\n");
        assert_eq!(trials, 100_000);
    }

    #[test]
    fn reprompts_until_valid() {
        let (trials, out) = ask("abc\n0\n2500\n");
        assert_eq!(trials, 2_500);
        assert_eq!(out.matches(UI_TEXT.invalid_trials).count(), 2);
        assert_eq!(out.matches(UI_TEXT.prompt_trials).count(), 3);
    }

    #[test]
    fn eof_defaults() {
        let (trials, _) = ask("");
        assert_eq!(trials, 100_000);
    }
}
