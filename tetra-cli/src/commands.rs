//! CLI command implementations.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tetra_common::Program;
use tracing::info;

use crate::{EXIT_INPUT, EXIT_RUNTIME};

/// Decode and execute a source file, writing program output to stdout.
pub fn run(path: &Path) -> Result<(), i32> {
    let program = read_program(path)?;
    info!(path = %path.display(), instructions = program.len(), "running");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = tetra_vm::run(&program, &mut out);
    // Program output has no trailing newline; make sure it is visible
    // before any diagnostic.
    let _ = out.flush();

    match result {
        Ok(stack) => {
            info!(depth = stack.len(), "finished");
            Ok(())
        }
        Err(e) => {
            eprintln!("runtime error: {e}");
            Err(EXIT_RUNTIME)
        }
    }
}

/// Decode a source file without running it.
pub fn check(path: &Path) -> Result<(), i32> {
    let program = read_program(path)?;
    println!(
        "OK: {} ({} instructions, {} skipped lines)",
        path.display(),
        program.len(),
        program.skipped_lines()
    );
    Ok(())
}

/// Print the canonical encoding of a source file.
pub fn disassemble(path: &Path) -> Result<(), i32> {
    let program = read_program(path)?;
    print!("{}", tetra_decoder::disassemble(&program));
    Ok(())
}

fn read_program(path: &Path) -> Result<Program, i32> {
    let text = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", path.display());
        EXIT_INPUT
    })?;

    tetra_decoder::decode(&text).map_err(|e| {
        eprintln!("parse error: {e}");
        EXIT_INPUT
    })
}
