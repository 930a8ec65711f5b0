use std::io::{self, BufRead, Write};

/// Line oriented terminal: prompts go to `output`, answers come from `input`.
pub struct Console<R, W>{
    input: R,
    output: W
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self{
        Console{ input, output }
    }

    pub fn output(&mut self) -> &mut W{
        &mut self.output
    }

    pub fn into_output(self) -> W{
        self.output
    }

    /// Reads one line without its terminator. Bytes that are not UTF-8
    /// become replacement characters. End of input is an `UnexpectedEof`
    /// error so callers never spin on a closed terminal.
    pub fn read_line(&mut self) -> io::Result<String>{
        let mut bytes = Vec::new();
        if self.input.read_until(b'\n', &mut bytes)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub fn prompt(&mut self, label: &str) -> io::Result<String>{
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn say(&mut self, message: &str) -> io::Result<()>{
        writeln!(self.output, "{}", message)
    }

    /// Asks until the answer parses as an integer.
    pub fn read_choice(&mut self) -> io::Result<i32>{
        loop {
            let answer = self.prompt("Please make your choice: ")?;
            match answer.trim().parse::<i32>() {
                Ok(choice) => return Ok(choice),
                Err(_) => self.say("Your input is invalid!")?
            }
        }
    }
}
