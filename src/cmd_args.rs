use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Command to run before (instead of) the interactive loop.
    /// Repeatable; commands run in order and the final snapshot is printed.
    #[clap(short = 'c', long = "command", help = "scripted shell command")]
    commands: Vec<String>,

    /// Print snapshots as pretty JSON instead of debug text
    #[clap(long, help = "JSON snapshot output")]
    json: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    commands: Vec<String>,
    json: bool,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        let args = ClapArgs::parse();
        Self {
            commands: args.commands,
            json: args.json,
        }
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = ClapArgs::parse_from(itr);
        Self {
            commands: args.commands,
            json: args.json,
        }
    }

    pub fn commands(&self) -> &[String] {
        &self.commands
    }

    pub fn json(&self) -> bool {
        self.json
    }
}
