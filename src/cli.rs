use console::Term;

// Every message line gets a right-aligned status prefix of this width
const PREFIX_LEN: usize = 10;

pub fn gen_prefix(prefix: &str) -> String {
    let width = console::measure_text_width(prefix);
    if width > PREFIX_LEN - 1 {
        panic!("Line prefix \"{prefix}\" too long!");
    }

    let mut res = " ".repeat(PREFIX_LEN - 1 - width);
    res.push_str(prefix);
    res.push(' ');
    res
}

pub struct Writer {
    term: Term,
}

impl Writer {
    pub fn new() -> Self {
        Writer {
            term: Term::stdout(),
        }
    }

    pub fn writeln(&self, prefix: &str, msg: &str) -> std::io::Result<()> {
        let mut lines = msg.lines();
        let first = lines.next().unwrap_or("");
        self.term
            .write_line(&format!("{}{}", gen_prefix(prefix), first))?;
        // Continuation lines are indented under an empty prefix
        for line in lines {
            self.term.write_line(&format!("{}{}", gen_prefix(""), line))?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! msg {
    ($($arg:tt)+) => {
        $crate::WRITER.writeln("", &format!($($arg)+)).ok();
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&console::style("INFO").blue().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&console::style("WARN").yellow().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&console::style("ERROR").red().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}

#[macro_export]
macro_rules! due_to {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&console::style("DUE TO").yellow().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        $crate::WRITER
            .writeln(&console::style("SUCCESS").green().bold().to_string(), &format!($($arg)+))
            .ok();
    };
}
