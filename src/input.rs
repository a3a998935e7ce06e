use std::fs;
use std::io::Write;
use std::path::Path;

use nom::IResult;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, i64 as integer, space0};
use nom::combinator::{all_consuming, map_res};
use nom::sequence::{delimited, separated_pair, tuple};

use crate::color::{Coloring, Graph, Node};
use crate::error::InputError;


/** reads an instance from a file, returns (nb colors, graph) */
pub fn read_instance<P: AsRef<Path>>(filename: P) -> Result<(usize, Graph), InputError> {
    let (n_colors, edges) = read_from_file(filename)?;
    Ok((n_colors, Graph::from_edges(&edges)?))
}

/// reads an instance file, returns (nb colors, edges)
pub fn read_from_file<P: AsRef<Path>>(filename: P) -> Result<(usize, Vec<(Node, Node)>), InputError> {
    read_from_str(&read_file(filename.as_ref())?)
}

/** parses an instance:
 - lines starting with '#' are comments (anywhere in the file)
 - the first other line is the header `colors = <positive integer>`
 - every following line is an edge `<node_a>,<node_b>`

blank lines are ignored.
*/
pub fn read_from_str(s: &str) -> Result<(usize, Vec<(Node, Node)>), InputError> {
    let mut n_colors: Option<usize> = None;
    let mut edges = Vec::new();
    for (line, content) in relevant_lines(s) {
        match n_colors {
            None => {
                let k = all_consuming(read_header)(content)
                    .ok()
                    .map(|(_, k)| k)
                    .filter(|k| *k > 0)
                    .ok_or_else(|| InputError::MalformedHeader { line, content: content.to_string() })?;
                n_colors = Some(k);
            }
            Some(_) => {
                let (_, edge) = all_consuming(read_edge)(content)
                    .map_err(|_| InputError::MalformedEdge { line, content: content.to_string() })?;
                edges.push(edge);
            }
        }
    }
    let n_colors = n_colors.ok_or(InputError::MissingHeader)?;
    Ok((n_colors, edges))
}

/// non-comment, non-blank lines with their 1-based line number
fn relevant_lines(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim_end_matches('\r')))
        .filter(|(_, l)| !l.trim().is_empty() && !l.trim_start().starts_with('#'))
}

fn read_file(filename: &Path) -> Result<String, InputError> {
    fs::read_to_string(filename).map_err(|source| InputError::Io {
        path: filename.display().to_string(),
        source,
    })
}

/// reads header `colors = <number>` (case-insensitive keyword)
pub fn read_header(s: &str) -> IResult<&str, usize> {
    delimited(
        tuple((space0, tag_no_case("colors"), space0, char('='), space0)),
        map_res(digit1, |d: &str| d.parse::<usize>()),
        space0,
    )(s)
}

/// reads two integers separated by a comma
pub fn read_edge(s: &str) -> IResult<&str, (Node, Node)> {
    separated_pair(
        delimited(space0, integer, space0),
        char(','),
        delimited(space0, integer, space0),
    )(s)
}

/// reads a solution line `<node>:<color>`
pub fn read_assignment(s: &str) -> IResult<&str, (Node, usize)> {
    separated_pair(
        delimited(space0, integer, space0),
        char(':'),
        delimited(space0, map_res(digit1, |d: &str| d.parse::<usize>()), space0),
    )(s)
}

/** parses a solution written by `coloring_to_string` */
pub fn read_coloring_from_str(s: &str) -> Result<Coloring, InputError> {
    let mut res = Coloring::new();
    for (line, content) in relevant_lines(s) {
        let (_, (node, color)) = all_consuming(read_assignment)(content)
            .map_err(|_| InputError::MalformedSolution { line, content: content.to_string() })?;
        res.insert(node, color);
    }
    Ok(res)
}

/// reads a solution file
pub fn read_coloring<P: AsRef<Path>>(filename: P) -> Result<Coloring, InputError> {
    read_coloring_from_str(&read_file(filename.as_ref())?)
}

/** writes a string encoding the solution: one `node:color` line per node, sorted by node */
pub fn coloring_to_string(coloring: &Coloring) -> String {
    let mut res = String::default();
    for (node, color) in coloring {
        res += format!("{}:{}\n", node, color).as_str();
    }
    res
}

/** writes a solution into a file */
pub fn write_coloring<P: AsRef<Path>>(filename: P, coloring: &Coloring) -> Result<(), InputError> {
    let filename = filename.as_ref();
    fs::write(filename, coloring_to_string(coloring)).map_err(|source| InputError::Io {
        path: filename.display().to_string(),
        source,
    })
}

/** writes an instance (comments, header, then one edge per line) */
pub fn write_instance<W: Write>(
    out: &mut W,
    inst: &Graph,
    n_colors: usize,
    comments: &[String],
) -> std::io::Result<()> {
    for comment in comments {
        writeln!(out, "# {}", comment)?;
    }
    writeln!(out, "colors = {}", n_colors)?;
    for (a, b) in inst.edges() {
        writeln!(out, "{},{}", a, b)?;
    }
    Ok(())
}
