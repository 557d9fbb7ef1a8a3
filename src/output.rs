// src/output.rs
//
// Portfolio serializers: projetos.json (full aggregates), projetos.csv
// (flattened key fields) and the per-project status reports.
//
// All writes happen after the portfolio is fully built in memory. JSON is
// pretty-printed with non-ASCII text verbatim (serde_json default); the
// CSV is written by hand since the column set is small and fixed.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::report;
use crate::types::{format_date_br, Project};

/// Fixed CSV column set; one row per project.
pub const CSV_HEADER: &str = "id,nome,data_inicio,data_termino_planejada,data_termino_real,\
orcamento_inicial,gerente,status,percentual_conclusao,spi,cpi,mudanca_escopo";

/// Serialize the full portfolio to the JSON wire format.
///
/// Exposed separately from the file writer so reproducibility checks can
/// compare the exact bytes without touching the filesystem.
pub fn to_json_string(projetos: &[Project]) -> Result<String> {
    let mut s = serde_json::to_string_pretty(projetos).context("Failed to serialize portfolio")?;
    s.push('\n');
    Ok(s)
}

fn csv_row(p: &Project) -> String {
    format!(
        "{},{},{},{},{},{:.2},{},{},{:.2},{:.4},{:.4},{}",
        p.id,
        p.nome,
        format_date_br(p.data_inicio),
        format_date_br(p.data_termino_planejada),
        format_date_br(p.data_termino_real),
        p.orcamento_inicial,
        p.gerente,
        p.status,
        p.percentual_conclusao,
        p.evm.spi,
        p.evm.cpi,
        if p.escopo.mudanca_escopo { "Sim" } else { "Não" }
    )
}

fn write_csv(projetos: &[Project], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    writeln!(w, "{}", CSV_HEADER)?;
    for p in projetos {
        writeln!(w, "{}", csv_row(p))?;
    }
    w.flush()?;
    Ok(())
}

/// Write the complete dataset under `out_dir`:
/// projetos.json, projetos.csv and status_files/<id>_<area>.txt.
pub fn write_dataset(projetos: &[Project], out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output dir {}", out_dir.display()))?;

    let json_path = out_dir.join("projetos.json");
    fs::write(&json_path, to_json_string(projetos)?)
        .with_context(|| format!("Failed to write {}", json_path.display()))?;

    write_csv(projetos, &out_dir.join("projetos.csv"))?;

    report::write_status_files(projetos, out_dir)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GenConfig;
    use crate::generator::Generator;
    use chrono::NaiveDate;

    fn sample_projects(n: usize) -> Vec<Project> {
        let cfg = GenConfig {
            num_projects: n,
            seed: 42,
            now: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
            ..GenConfig::default()
        };
        Generator::new(cfg).run().unwrap()
    }

    #[test]
    fn json_round_trip_is_lossless() {
        let projetos = sample_projects(20);
        let json = to_json_string(&projetos).unwrap();
        let back: Vec<Project> = serde_json::from_str(&json).unwrap();
        assert_eq!(projetos, back);
    }

    #[test]
    fn json_floats_parse_back_bit_for_bit() {
        // Derived metrics carry full f64 precision; the parser must return
        // the exact bits, not the nearest shorter decimal.
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrap {
            a: f64,
            b: f64,
        }
        let w = Wrap {
            a: 4025141.8290000004,
            b: 1863294.0211140406,
        };
        let json = serde_json::to_string(&w).unwrap();
        let back: Wrap = serde_json::from_str(&json).unwrap();
        assert_eq!(w.a.to_bits(), back.a.to_bits());
        assert_eq!(w.b.to_bits(), back.b.to_bits());
    }

    #[test]
    fn json_preserves_non_ascii_verbatim() {
        let projetos = sample_projects(20);
        let json = to_json_string(&projetos).unwrap();
        // Accented catalog text must not be \u-escaped.
        assert!(json.contains("Concluído") || json.contains("Não") || json.contains("çã"));
        assert!(!json.contains("\\u00"));
    }

    #[test]
    fn csv_rows_have_fixed_column_count() {
        let projetos = sample_projects(20);
        let cols = CSV_HEADER.split(',').count();
        assert_eq!(cols, 12);
        for p in &projetos {
            assert_eq!(csv_row(p).split(',').count(), cols);
        }
    }

    #[test]
    fn csv_scope_flag_uses_sim_nao() {
        let projetos = sample_projects(50);
        for p in &projetos {
            let row = csv_row(p);
            let last = row.rsplit(',').next().unwrap();
            assert!(last == "Sim" || last == "Não");
            assert_eq!(last == "Sim", p.escopo.mudanca_escopo);
        }
    }
}
