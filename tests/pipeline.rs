use std::path::Path;

use cscan::{Diagnostics, Lexeme, LexemeKind, Loc, ScanError, SourceFile};

fn dump(path: &str) -> Result<(String, String), ScanError> {
    let file = SourceFile::open(Path::new(path))?;
    let mut diag_out: Vec<u8> = Vec::new();
    let mut dump_out: Vec<u8> = Vec::new();
    {
        let mut diags = Diagnostics::new(file.path(), Box::new(&mut diag_out));
        file.dump(&mut diags, &mut dump_out)?;
    }
    Ok((
        String::from_utf8_lossy(&dump_out).into_owned(),
        String::from_utf8_lossy(&diag_out).into_owned(),
    ))
}

#[test]
fn hello_world() -> Result<(), ScanError> {
    let (dumped, diags) = dump("tests/hello_world.c")?;
    assert_eq!(
        "Lexeme(type=LEX_RLINE, text=#include <stdio.h>, locs=1:1-18)\n\
         Lexeme(type=LEX_RLINE, text=, locs=)\n\
         Lexeme(type=LEX_RLINE, text=int main(void) {, locs=3:1-16)\n\
         Lexeme(type=LEX_RLINE, text=    printf(\"hello, world\\n\");, locs=4:1-29)\n\
         Lexeme(type=LEX_RLINE, text=    return 0;, locs=5:1-13)\n\
         Lexeme(type=LEX_RLINE, text=}, locs=6:1)\n",
        dumped
    );
    assert!(diags.is_empty());
    Ok(())
}

#[test]
fn splices() -> Result<(), ScanError> {
    let (dumped, diags) = dump("tests/splice.c")?;
    assert_eq!(
        "Lexeme(type=LEX_CLINE, text=#define MAX(a, b)     ((a) > (b) ? (a) : (b)), locs=1:1-18;2:1-27)\n\
         Lexeme(type=LEX_CLINE, text=int x = MAX(1, 2);, locs=3:1-15;4:1;5:1-2)\n",
        dumped
    );
    assert!(diags.is_empty());
    Ok(())
}

#[test]
fn slashed_end() -> Result<(), ScanError> {
    let file = SourceFile::open(Path::new("tests/slashed_end.c"))?;
    let mut diag_out: Vec<u8> = Vec::new();
    let mut diags = Diagnostics::new(file.path(), Box::new(&mut diag_out));
    let lines = file.read(&mut diags)?;

    assert_eq!(2, lines.len());
    assert_eq!("#define BROKEN 1 ", lines[1].text());
    assert_eq!(LexemeKind::RawLine, lines[1].kind());
    assert_eq!(1, diags.reported().len());
    assert_eq!(Loc::new(2, 18), diags.reported()[0].loc());
    assert_eq!("Slashed end", diags.reported()[0].message());
    drop(diags);

    let expected = format!("Error {}:2:18 Slashed end\n", file.path().display());
    assert_eq!(expected, String::from_utf8_lossy(&diag_out));
    Ok(())
}

#[test]
fn every_char_traces_to_its_source() -> Result<(), ScanError> {
    let source = std::fs::read_to_string("tests/splice.c")?;
    let physical: Vec<Vec<char>> = source.lines().map(|l| l.chars().collect()).collect();

    let file = SourceFile::open(Path::new("tests/splice.c"))?;
    let mut diags = Diagnostics::new(file.path(), Box::new(std::io::sink()));
    for lexeme in file.read(&mut diags)? {
        assert_eq!(lexeme.text().chars().count(), lexeme.locs().len());
        let mut prev: Option<Loc> = None;
        for (ch, loc) in lexeme.text().chars().zip(lexeme.locs()) {
            assert_eq!(ch, physical[loc.line() - 1][loc.col() - 1]);
            assert!(prev.map_or(true, |p| p < *loc));
            prev = Some(*loc);
        }
    }
    Ok(())
}

#[test]
fn unspliced_source_passes_through() -> Result<(), ScanError> {
    let source = std::fs::read_to_string("tests/hello_world.c")?;
    let file = SourceFile::inline(&source);
    let mut diags = Diagnostics::new(file.path(), Box::new(std::io::sink()));
    let lines = file.read(&mut diags)?;

    assert_eq!(
        source.lines().collect::<Vec<_>>(),
        lines.iter().map(Lexeme::text).collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn rescanning_is_identical() -> Result<(), ScanError> {
    let file = SourceFile::open(Path::new("tests/slashed_end.c"))?;
    let mut first_diags = Diagnostics::new(file.path(), Box::new(std::io::sink()));
    let first = file.read(&mut first_diags)?;
    let mut second_diags = Diagnostics::new(file.path(), Box::new(std::io::sink()));
    let second = file.read(&mut second_diags)?;

    assert_eq!(first, second);
    assert_eq!(first_diags.reported(), second_diags.reported());
    Ok(())
}

#[test]
fn stop_early() -> Result<(), ScanError> {
    let file = SourceFile::open(Path::new("tests/splice.c"))?;
    let mut diags = Diagnostics::new(file.path(), Box::new(std::io::sink()));
    let first = file.logical_lines(&mut diags)?.next().transpose()?;
    assert_eq!(Some(LexemeKind::ContinuedLine), first.map(|l| l.kind()));
    Ok(())
}
