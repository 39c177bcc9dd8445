use clap::Parser;

// CLI argument structure
#[derive(Parser, Debug, Clone)]
#[command(name = "action-counter")]
#[command(about = "Counts actions and reports how many happened in the last five minutes")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // Address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

impl Args {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
