use std::io::Write;

use anyhow::Result;
use itertools::Itertools;
use ndarray::Array2;

/// Writes a matrix as tab-separated text: one row per line, rows are sources, columns are destinations.
pub fn write_tsv(values: &Array2<f64>, mut writer: impl Write) -> Result<()> {
    for row in values.rows() {
        writeln!(writer, "{}", row.iter().join("\t"))?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn to_string(values: &Array2<f64>) -> String {
        let mut buffer = Vec::new();
        write_tsv(values, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn one_line_per_row() {
        let m = array![[0.0, 960.0, 1.5], [0.0, 0.0, 0.0]];
        assert_eq!(to_string(&m), "0\t960\t1.5\n0\t0\t0\n");
    }

    #[test]
    fn empty_matrix() {
        assert_eq!(to_string(&Array2::<f64>::zeros((0, 0))), "");
    }
}
