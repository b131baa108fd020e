//! calcvm - CLI
//!
//! Minimal command-line interface to execute calcvm bytecode.
//!
//! Usage: `calcvm [FILE] [--code 0,5,8,9] [--stack-capacity N] [--trap-domain-errors] [--disasm]`

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

use calcvm_core::config::DEFAULT_STACK_CAPACITY;
use calcvm_core::{disassemble, DomainPolicy, Interpreter, VmConfig};

#[derive(Parser, Debug)]
#[command(name = "calcvm")]
#[command(about = "Run a calcvm arithmetic bytecode program")]
struct Args {
    /// Raw bytecode file (the file bytes are the program)
    #[arg(conflicts_with = "code", required_unless_present = "code")]
    file: Option<PathBuf>,

    /// Bytecode given inline as comma-separated byte values
    #[arg(long, value_delimiter = ',')]
    code: Option<Vec<u8>>,

    /// Operand stack capacity
    #[arg(long = "stack-capacity", default_value_t = DEFAULT_STACK_CAPACITY)]
    stack_capacity: usize,

    /// Fail on sqrt/ln/pow domain errors instead of producing NaN
    #[arg(long = "trap-domain-errors")]
    trap_domain_errors: bool,

    /// Print a listing instead of executing
    #[arg(long)]
    disasm: bool,
}

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,calcvm_core=info,calcvm=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let args = Args::parse();

    let bytecode = match load_bytecode(&args) {
        Ok(b) => b,
        Err(e) => {
            error!("failed to read bytecode: {}", e);
            process::exit(1);
        }
    };

    if args.disasm {
        match disassemble(&bytecode) {
            Ok(listing) => print!("{}", listing),
            Err(e) => {
                error!("invalid bytecode: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let mut vm = Interpreter::new(config_from(&args));
    match vm.run(&bytecode) {
        Ok(result) => {
            info!(steps = vm.steps(), "program halted");
            println!("{}", result);
        }
        Err(e) => {
            error!("runtime error: {}", e);
            process::exit(1);
        }
    }
}

fn load_bytecode(args: &Args) -> io::Result<Vec<u8>> {
    match (&args.code, &args.file) {
        (Some(code), _) => Ok(code.clone()),
        (None, Some(path)) => fs::read(path),
        (None, None) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "no bytecode file or --code given",
        )),
    }
}

fn config_from(args: &Args) -> VmConfig {
    let policy = if args.trap_domain_errors {
        DomainPolicy::Trap
    } else {
        DomainPolicy::Propagate
    };
    VmConfig::new()
        .with_stack_capacity(args.stack_capacity)
        .with_domain_policy(policy)
}
