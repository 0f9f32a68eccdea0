use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use glob::glob;
use keyword_dfa::module::render_module;
use keyword_dfa::word_list::{parse_keyword_set_def, KeywordSetDef};
use keyword_dfa::Automaton;

// relative to root of workspace
const KEYWORD_DIR_DEFS: &str = "data/keywords";

fn defs_dir() -> Result<PathBuf, anyhow::Error> {
    let package_root = env::var("CARGO_MANIFEST_DIR").context("must use cargo as build system")?;
    let workspace_root = Path::new(&package_root)
        .parent()
        .and_then(Path::parent)
        .context("corrupted folder structure")?;
    Ok(workspace_root.join(KEYWORD_DIR_DEFS))
}

pub fn parse_keyword_set_defs() -> Result<Vec<KeywordSetDef>, anyhow::Error> {
    let defs_dir = defs_dir()?;
    let defs_dir = defs_dir
        .to_str()
        .context("path to package contains non-UTF8 characters, which cargo does not like")?;
    println!("cargo:rerun-if-changed={}", defs_dir);

    let mut keyword_set_defs = Vec::new();
    for entry in glob(&format!("{}/*.def", defs_dir))? {
        let entry = entry?;
        let def_name = entry
            .file_stem()
            .context("should not be ..")?
            .to_str()
            .context("strange filename")?
            .to_string();

        let def_string = fs::read_to_string(&entry).with_context(|| format!("unable to read {}", entry.display()))?;
        let keyword_set_def = parse_keyword_set_def(def_name, &def_string)
            .with_context(|| format!("malformed keyword set {}", entry.display()))?;
        keyword_set_defs.push(keyword_set_def);
    }

    Ok(keyword_set_defs)
}

pub fn write_matchers(keyword_set_defs: &[KeywordSetDef]) -> Result<(), anyhow::Error> {
    let out_dir = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR not set")?);

    for keyword_set_def in keyword_set_defs {
        let automaton = Automaton::from_words(&keyword_set_def.words)
            .with_context(|| format!("cannot build matcher for {}", keyword_set_def.name))?;
        let rs_path = out_dir.join(format!("{}.rs", keyword_set_def.name));
        fs::write(&rs_path, render_module(&automaton, &keyword_set_def.name))
            .with_context(|| format!("unable to write {}", rs_path.display()))?;
    }

    Ok(())
}
