use cipherchain::cli::{
    classify_file, decode_text, decrypt_file, encrypt_file, render_report, TransformOptions,
};
use cipherchain::trace::ChainTrace;
use cipherchain::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROFILE: &str = env!("CIPHERCHAIN_PROFILE");
const GIT_HASH: &str = env!("CIPHERCHAIN_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} {} ({})", PROFILE, VERSION, GIT_HASH))
}

#[derive(Parser)]
#[command(name = "cipherchain")]
#[command(author, about = "Educational cipher chain: Vigenere -> Caesar -> LFSR stream", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file through the three-stage chain
    #[command(alias = "e")]
    Encrypt {
        /// Vigenere key (alphabetic, case-insensitive)
        #[arg(long, required = true)]
        key: String,

        /// Input file to encrypt
        input: PathBuf,

        /// Output file (defaults to <INPUT>.enc)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Decrypt a file by reversing the chain
    #[command(alias = "d")]
    Decrypt {
        /// Vigenere key (alphabetic, case-insensitive)
        #[arg(long, required = true)]
        key: String,

        /// Input file to decrypt
        input: PathBuf,

        /// Output file (defaults to <INPUT>.dec)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Print the recovered content to stdout as UTF-8 text
        #[arg(long)]
        print: bool,

        #[command(flatten)]
        common: CommonArgs,
    },

    /// Classify a file as plaintext or encrypted
    #[command(alias = "c")]
    Classify {
        /// File to inspect
        file: PathBuf,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct CommonArgs {
    /// Caesar shift (1-25)
    #[arg(long, default_value = "3")]
    shift: u8,

    /// LFSR seed (1-255)
    #[arg(long, default_value = "42")]
    seed: u8,

    /// LFSR tap positions (0-7), comma-separated
    #[arg(long, value_delimiter = ',', default_value = "0,2,3,4")]
    taps: Vec<u8>,

    /// Skip the plaintext/encrypted gate check
    #[arg(long)]
    force: bool,

    /// Print a per-stage trace of the transformation
    #[arg(long)]
    trace: bool,

    /// Write the trace as JSON to the given path
    #[arg(long, value_name = "PATH")]
    trace_json: Option<PathBuf>,
}

impl CommonArgs {
    fn options(&self, key: String) -> TransformOptions {
        TransformOptions {
            key,
            shift: self.shift,
            seed: self.seed,
            taps: self.taps.clone(),
            force: self.force,
            trace: self.trace || self.trace_json.is_some(),
        }
    }
}

fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    let mut os = input.as_os_str().to_os_string();
    os.push(extension);
    PathBuf::from(os)
}

fn emit_trace(trace: Option<ChainTrace>, common: &CommonArgs) -> Result<()> {
    let trace = match trace {
        Some(trace) => trace,
        None => return Ok(()),
    };
    if common.trace {
        print!("{}", trace);
    }
    if let Some(path) = &common.trace_json {
        std::fs::write(path, serde_json::to_string_pretty(&trace)?)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("cipherchain {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            key,
            input,
            output,
            common,
        } => {
            let output_path = output.unwrap_or_else(|| default_output_path(&input, ".enc"));
            match encrypt_file(&input, &output_path, &common.options(key)) {
                Ok(trace) => {
                    println!("Encrypted to {}", output_path.display());
                    emit_trace(trace, &common)
                }
                Err(e) => Err(e),
            }
        }

        Commands::Decrypt {
            key,
            input,
            output,
            print,
            common,
        } => {
            let output_path = output.unwrap_or_else(|| default_output_path(&input, ".dec"));
            match decrypt_file(&input, &output_path, &common.options(key)) {
                Ok((bytes, trace)) => {
                    println!("Decrypted to {}", output_path.display());
                    emit_trace(trace, &common).and_then(|()| {
                        if print {
                            let text = decode_text(&bytes)?;
                            print!("{}", text);
                        }
                        Ok(())
                    })
                }
                Err(e) => Err(e),
            }
        }

        Commands::Classify { file, json } => match classify_file(&file) {
            Ok(report) => {
                if json {
                    match serde_json::to_string_pretty(&report) {
                        Ok(text) => {
                            println!("{}", text);
                            Ok(())
                        }
                        Err(e) => Err(e.into()),
                    }
                } else {
                    print!("{}", render_report(&report));
                    Ok(())
                }
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
