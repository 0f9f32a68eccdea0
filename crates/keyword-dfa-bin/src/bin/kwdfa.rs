use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use codegen::Scope;
use glob::glob;
use log::{info, LevelFilter};

use keyword_dfa::emit::emit;
use keyword_dfa::graph::to_dot;
use keyword_dfa::module::render_module;
use keyword_dfa::word_list::{parse_keyword_set_def, KeywordSetDef};
use keyword_dfa::{Automaton, CodePrinter};

/// Generates keyword-matching state machines for hand-written scanners.
#[derive(Parser, Debug)]
#[command(name = "kwdfa", version)]
struct Cli {
    /// Log what the generator is doing (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit the matcher for one keyword set
    Emit {
        /// Keyword set definition, one word per line (defaults to the Lox keywords)
        input: Option<PathBuf>,
        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Wrap the matcher into a complete module with a `match_<name>` entry point
        #[arg(short, long)]
        module: bool,
        /// Keyword set name used for generated item names (defaults to the input file stem)
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Render every *.def in a directory to <name>.rs plus a mod.rs
    Batch {
        defs_dir: PathBuf,
        out_dir: PathBuf,
    },
    /// Print the automaton in Graphviz format
    Dot {
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Command::Emit {
            input,
            output,
            module,
            name,
        } => {
            let mut def = read_def(input.as_deref())?;
            if let Some(name) = name {
                def.name = name;
            }
            let automaton = build(&def)?;

            let code = if module {
                render_module(&automaton, &def.name)
            } else {
                let mut printer = CodePrinter::new();
                emit(&automaton, &mut printer);
                printer.into_string()
            };

            match output {
                Some(path) => {
                    fs::write(&path, &code).with_context(|| format!("failed to write {}", path.display()))?;
                    info!("wrote {}, {} bytes", path.display(), code.len());
                }
                None => io::stdout().write_all(code.as_bytes())?,
            }
        }
        Command::Batch { defs_dir, out_dir } => batch(&defs_dir, &out_dir)?,
        Command::Dot { input } => {
            let def = read_def(input.as_deref())?;
            print!("{}", to_dot(&build(&def)?));
        }
    }

    Ok(())
}

fn read_def(input: Option<&Path>) -> anyhow::Result<KeywordSetDef> {
    let Some(path) = input else {
        return Ok(KeywordSetDef::lox());
    };

    let def_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("strange filename {}", path.display()))?
        .to_string();
    let def_string = fs::read_to_string(path).with_context(|| format!("unable to read {}", path.display()))?;

    Ok(parse_keyword_set_def(def_name, &def_string)?)
}

fn build(def: &KeywordSetDef) -> anyhow::Result<Automaton> {
    let automaton = Automaton::from_words(&def.words)
        .with_context(|| format!("cannot build matcher for keyword set `{}`", def.name))?;
    info!(
        "keyword set `{}`: {} words, {} states, {} transitions",
        def.name,
        def.words.len(),
        automaton.states().len(),
        automaton.transitions().len()
    );
    Ok(automaton)
}

fn batch(defs_dir: &Path, out_dir: &Path) -> anyhow::Result<()> {
    let defs_dir = defs_dir
        .to_str()
        .with_context(|| format!("non-UTF8 path {}", defs_dir.display()))?;
    fs::create_dir_all(out_dir)?;

    let mut mod_rs = Scope::new();
    for entry in glob(&format!("{}/*.def", defs_dir))? {
        let entry = entry?;
        let def = read_def(Some(entry.as_path()))?;
        let automaton = build(&def)?;

        let rs_path = out_dir.join(format!("{}.rs", def.name));
        let code = render_module(&automaton, &def.name);
        fs::write(&rs_path, &code).with_context(|| format!("failed to write {}", rs_path.display()))?;
        info!("wrote {}, {} bytes", rs_path.display(), code.len());

        mod_rs.raw(&format!("pub mod {};", def.name));
    }

    let mod_rs_path = out_dir.join("mod.rs");
    fs::write(&mod_rs_path, mod_rs.to_string())?;
    info!("wrote {}", mod_rs_path.display());

    Ok(())
}
