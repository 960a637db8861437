//! Command-line front end: decode captured receiver streams and build
//! configuration commands as hex, ready for whatever transport carries
//! them.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rxproto::cfg::{self, CfgLayer, CfgLayers, Value};
use rxproto::{Frame, StreamDecoder, Verbosity};

#[derive(Parser)]
#[command(name = "rxproto", version, about = "GNSS receiver protocol tool")]
struct Cli {
    /// Increase decode detail (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Classify and decode a capture file (or stdin)
    Decode {
        /// Capture file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Configuration item commands
    #[command(subcommand)]
    Cfg(CfgCommand),
    /// Build a poll request for a class/id pair
    Poll {
        /// Message class, decimal or 0x-prefixed hex
        class: String,
        /// Message id, decimal or 0x-prefixed hex
        id: String,
    },
}

#[derive(Subcommand)]
enum CfgCommand {
    /// Show a registry item
    Show { name: String },
    /// Build a get request for named items
    Get {
        #[arg(required = true)]
        names: Vec<String>,
        /// Layer to read: ram, bbr, flash or default
        #[arg(long, default_value = "ram")]
        layer: String,
        /// Skip this many items (chunked reads)
        #[arg(long, default_value_t = 0)]
        position: u16,
    },
    /// Build a set request from name=value pairs
    Set {
        #[arg(required = true)]
        pairs: Vec<String>,
        #[command(flatten)]
        layers: LayerArgs,
    },
    /// Build a delete request for named items
    Del {
        #[arg(required = true)]
        names: Vec<String>,
        #[command(flatten)]
        layers: LayerArgs,
    },
}

#[derive(Args)]
struct LayerArgs {
    /// Apply to battery-backed RAM as well
    #[arg(long)]
    bbr: bool,
    /// Apply to flash as well
    #[arg(long)]
    flash: bool,
}

impl LayerArgs {
    fn mask(&self) -> CfgLayers {
        let mut layers = CfgLayers::RAM;
        if self.bbr {
            layers |= CfgLayers::BBR;
        }
        if self.flash {
            layers |= CfgLayers::FLASH;
        }
        layers
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let verbosity = if cli.verbose == 0 {
        Verbosity::Normal
    } else {
        Verbosity::Full
    };

    match cli.command {
        Command::Decode { file } => decode(file, verbosity),
        Command::Cfg(cmd) => run_cfg(cmd),
        Command::Poll { class, id } => {
            let class = parse_u8(&class).context("bad class")?;
            let id = parse_u8(&id).context("bad id")?;
            let info = rxproto::lookup(class, id);
            eprintln!("polling {}", info.name);
            print_bytes(&rxproto::build_poll(class, id));
            Ok(())
        },
    }
}

fn decode(file: Option<PathBuf>, verbosity: Verbosity) -> Result<()> {
    let mut data = Vec::new();
    match file {
        Some(path) => {
            File::open(&path)
                .with_context(|| format!("cannot open {}", path.display()))?
                .read_to_end(&mut data)?;
        },
        None => {
            io::stdin().lock().read_to_end(&mut data)?;
        },
    }

    let mut decoder = StreamDecoder::new(verbosity);
    for decoded in decoder.advance_all(&data) {
        match &decoded.frame {
            Frame::Ubx(ubx) => {
                // binary frames always come with a rendering
                if let Some(rendered) = &decoded.rendered {
                    if ubx.checksum_ok {
                        println!("{rendered}");
                    } else {
                        println!("{rendered} [checksum mismatch]");
                    }
                }
            },
            Frame::Sentence(line) => println!("NMEA  {line}"),
            Frame::StructuredLog(line) => println!("LOG   {line}"),
            Frame::Comment(line) => println!("#     {line}"),
            Frame::Rtcm(rtcm) => {
                println!("RTCM  type {} len {}", rtcm.msg_type, rtcm.payload_len)
            },
        }
    }
    Ok(())
}

fn run_cfg(cmd: CfgCommand) -> Result<()> {
    match cmd {
        CfgCommand::Show { name } => {
            let item = cfg::lookup_by_name(&name)?;
            println!("{}", item.name);
            println!("  key   {:#010x}", item.key);
            println!("  type  {}", item.ty);
            if item.scale != 1.0 {
                println!("  scale {}", item.scale);
            }
            if !item.unit.is_empty() {
                println!("  unit  {}", item.unit);
            }
            if !item.description.is_empty() {
                println!("  info  {}", item.description);
            }
            Ok(())
        },
        CfgCommand::Get {
            names,
            layer,
            position,
        } => {
            let layer = match layer.as_str() {
                "ram" => CfgLayer::Ram,
                "bbr" => CfgLayer::Bbr,
                "flash" => CfgLayer::Flash,
                "default" => CfgLayer::Default,
                other => bail!("unknown layer `{other}`"),
            };
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            print_bytes(&rxproto::build_valget(layer, position, &names)?);
            Ok(())
        },
        CfgCommand::Set { pairs, layers } => {
            let mut resolved: Vec<(&str, Value)> = Vec::with_capacity(pairs.len());
            for pair in &pairs {
                let (name, text) = pair
                    .split_once('=')
                    .with_context(|| format!("`{pair}` is not name=value"))?;
                let item = cfg::lookup_by_name(name)?;
                resolved.push((name, item.parse_value(text)?));
            }
            print_bytes(&rxproto::build_valset(layers.mask(), &resolved)?);
            Ok(())
        },
        CfgCommand::Del { names, layers } => {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            print_bytes(&rxproto::build_valdel(layers.mask(), &names)?);
            Ok(())
        },
    }
}

fn parse_u8(s: &str) -> Result<u8> {
    let v = match s.strip_prefix("0x") {
        Some(hex) => u8::from_str_radix(hex, 16)?,
        None => s.parse()?,
    };
    Ok(v)
}

fn print_bytes(bytes: &[u8]) {
    let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
    println!("{}", hex.join(" "));
}
