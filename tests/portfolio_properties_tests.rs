// tests/portfolio_properties_tests.rs
//
// Portfolio-wide invariants over a generated batch: completion bounds,
// cost-category sums, status/SPI coherence, dependency ordering and
// occurred-risk referential integrity.

use chrono::NaiveDate;

use projsynth::{GenConfig, Generator, Project, Status};

fn fixed_now() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

fn generate(n: usize, seed: u64) -> Vec<Project> {
    let cfg = GenConfig {
        num_projects: n,
        seed,
        now: fixed_now(),
        ..GenConfig::default()
    };
    Generator::new(cfg).run().unwrap()
}

/// Index of a project id ("PROJ-0007" -> 6).
fn id_index(id: &str) -> usize {
    id.strip_prefix("PROJ-").unwrap().parse::<usize>().unwrap() - 1
}

#[test]
fn completion_bounded_and_100_iff_completed() {
    for p in generate(300, 42) {
        assert!(p.percentual_conclusao >= 0.0);
        assert!(p.percentual_conclusao <= 100.0);
        assert_eq!(p.percentual_conclusao == 100.0, p.status == Status::Completed);
    }
}

#[test]
fn cost_categories_sum_to_actual_cost() {
    for p in generate(300, 42) {
        let soma = p.categorias_custos.total();
        let ac = p.evm.custo_real_atual;
        let scale = ac.abs().max(1.0);
        assert!(
            (soma - ac).abs() / scale < 1e-6,
            "{}: sum {} != ac {}",
            p.id,
            soma,
            ac
        );
    }
}

#[test]
fn spi_coherent_with_status() {
    let mut seen = [false; 3];
    for p in generate(300, 42) {
        match p.status {
            Status::Delayed => {
                seen[0] = true;
                assert!(p.evm.spi <= 0.9, "{}: delayed spi {}", p.id, p.evm.spi);
            }
            Status::Completed => {
                seen[1] = true;
                assert!((0.95..=1.1).contains(&p.evm.spi));
            }
            Status::InProgress => {
                seen[2] = true;
                assert!((0.85..=1.15).contains(&p.evm.spi));
            }
            Status::Cancelled => {}
        }
    }
    assert!(seen.iter().all(|s| *s), "batch must cover all bounded statuses");
}

#[test]
fn evm_forecast_invariants() {
    for p in generate(300, 42) {
        let scale = p.orcamento_inicial.max(1.0);
        assert!((p.evm.eac - (p.evm.custo_real_atual + p.evm.etc)).abs() / scale < 1e-9);
        assert!((p.evm.vac - (p.orcamento_inicial - p.evm.eac)).abs() / scale < 1e-9);
        let ev = p.orcamento_inicial * p.percentual_conclusao / 100.0;
        assert!((p.evm.valor_agregado - ev).abs() / scale < 1e-9);
    }
}

#[test]
fn dependencies_only_point_backwards() {
    for p in generate(300, 42) {
        let own = id_index(&p.id);
        for d in &p.dependencias {
            assert_eq!(d.projeto_id, p.id);
            assert!(
                id_index(&d.projeto_dependencia_id) < own,
                "{} depends on {}",
                p.id,
                d.projeto_dependencia_id
            );
        }
    }
}

#[test]
fn occurred_risks_reference_own_catalog_within_window() {
    let now = fixed_now();
    for p in generate(300, 42) {
        for o in &p.riscos_ocorridos {
            assert!(
                p.riscos.iter().any(|r| r.id == o.risco_id),
                "{}: occurred risk {} not in catalog",
                p.id,
                o.risco_id
            );
            assert!(o.data_ocorrencia >= p.data_inicio);
            assert!(o.data_ocorrencia <= now);
        }
        assert!(p.riscos_ocorridos.len() <= p.riscos.len());
    }
}

#[test]
fn delayed_projects_look_delayed_everywhere() {
    for p in generate(300, 42) {
        if p.status == Status::Delayed {
            assert!(p.motivo_atraso.is_some());
            assert!(p.data_termino_real > p.data_termino_planejada);
            assert!(!p.tarefas_atrasadas.is_empty());
            for t in &p.tarefas_atrasadas {
                assert!(p.tarefas_criticas.contains(t));
            }
        } else {
            assert!(p.motivo_atraso.is_none());
            assert!(p.tarefas_atrasadas.is_empty());
        }
    }
}

#[test]
fn reproducibility_same_seed_byte_identical_json() {
    let a = generate(50, 42);
    let b = generate(50, 42);
    let json_a = projsynth::to_json_string(&a).unwrap();
    let json_b = projsynth::to_json_string(&b).unwrap();
    assert_eq!(json_a, json_b);
}

#[test]
fn json_round_trip_field_for_field() {
    let projetos = generate(50, 42);
    let json = projsynth::to_json_string(&projetos).unwrap();
    let back: Vec<Project> = serde_json::from_str(&json).unwrap();
    assert_eq!(projetos, back);
}

#[test]
fn boundary_counts() {
    // Zero projects is rejected before generation starts.
    let cfg = GenConfig {
        num_projects: 0,
        now: fixed_now(),
        ..GenConfig::default()
    };
    assert!(Generator::new(cfg).run().is_err());

    // One project has no earlier peers, hence no dependencies.
    let one = generate(1, 42);
    assert_eq!(one.len(), 1);
    assert!(one[0].dependencias.is_empty());
}
