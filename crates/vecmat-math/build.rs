//! Build script generating the named swizzle accessors.
//!
//! For every vector size 2..=4 it writes a getter for each ordered choice of
//! 2, 3 or 4 components (`xy`, `zx`, `yyy`, `wzyx`, ...) and a `set_` form for
//! each choice without repeats. The output is included by `src/swizzle.rs`.

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const COMPONENTS: [char; 4] = ['x', 'y', 'z', 'w'];

/// All index lists of length `len` over `0..size`, in lexicographic order.
fn index_lists(size: usize, len: usize) -> Vec<Vec<usize>> {
    let mut lists = vec![Vec::new()];
    for _ in 0..len {
        lists = lists
            .into_iter()
            .flat_map(|prefix| {
                (0..size).map(move |i| {
                    let mut next = prefix.clone();
                    next.push(i);
                    next
                })
            })
            .collect();
    }
    lists
}

fn is_distinct(indices: &[usize]) -> bool {
    indices
        .iter()
        .enumerate()
        .all(|(k, i)| !indices[..k].contains(i))
}

fn write_impl(out: &mut String, size: usize) -> std::fmt::Result {
    writeln!(out, "impl<T: Scalar> Vector<T, {size}> {{")?;
    for len in 2..=4 {
        for indices in index_lists(size, len) {
            let name: String = indices.iter().map(|&i| COMPONENTS[i]).collect();
            let reads: Vec<String> = indices.iter().map(|i| format!("self.0[{i}]")).collect();
            writeln!(out, "    /// Swizzle `{name}`.")?;
            writeln!(out, "    #[inline]")?;
            writeln!(out, "    pub fn {name}(self) -> Vector<T, {len}> {{")?;
            writeln!(out, "        Vector([{}])", reads.join(", "))?;
            writeln!(out, "    }}")?;

            if is_distinct(&indices) {
                writeln!(out, "    /// Writes through swizzle `{name}`.")?;
                writeln!(out, "    #[inline]")?;
                writeln!(out, "    pub fn set_{name}(&mut self, v: Vector<T, {len}>) {{")?;
                for (k, i) in indices.iter().enumerate() {
                    writeln!(out, "        self.0[{i}] = v.0[{k}];")?;
                }
                writeln!(out, "    }}")?;
            }
        }
    }
    writeln!(out, "}}")
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");

    let mut out = String::new();
    for size in 2..=4 {
        write_impl(&mut out, size)?;
    }

    let path = PathBuf::from(std::env::var("OUT_DIR")?).join("swizzles.rs");
    fs::write(path, out)?;
    Ok(())
}
