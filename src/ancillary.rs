// src/ancillary.rs
//
// Ancillary record generators: scope changes, requirements, risks and
// occurrences, stakeholders, communications, quality metrics, resource
// allocations, cross-project dependencies, lessons learned and critical /
// delayed tasks.
//
// Each generator is stateless apart from the shared SamplerRng; the only
// cross-project input is the list of already-generated ids consumed by the
// dependency generator.

use chrono::NaiveDate;

use crate::catalog;
use crate::rng::SamplerRng;
use crate::types::{
    ChangeRequest, CommunicationItem, Dependency, DependencyKind, LessonLearned, OccurredRisk,
    QualityMetric, Requirement, ResourceAllocation, Risk, ScopeChange, Severity, Stakeholder,
    Task,
};

/// Uniform date in [start, end], inclusive on both ends.
fn date_between(rng: &mut SamplerRng, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    let span = (end - start).num_days().max(0);
    start + chrono::Days::new(rng.uniform_i64(0, span) as u64)
}

/// Scope-change block: 30% of projects carry a change, with impacts and
/// 1-5 sequentially numbered change requests.
pub fn scope_change(rng: &mut SamplerRng, budget: f64) -> ScopeChange {
    if !rng.probability(0.3) {
        return ScopeChange {
            mudanca_escopo: false,
            descricao_mudancas: "N/A".to_string(),
            impacto_cronograma: 0,
            impacto_custo: 0.0,
            solicitacoes_mudanca: Vec::new(),
        };
    }

    let descricao = (*rng.choose(catalog::CHANGE_DESCRIPTIONS)).to_string();
    let impacto_cronograma = rng.uniform_i64(5, 60);
    let impacto_custo = budget * rng.uniform_f64(0.05, 0.2);

    let num = rng.uniform_i64(1, 5) as usize;
    let solicitacoes = (0..num)
        .map(|j| ChangeRequest {
            id: format!("SCM-{:02}", j + 1),
            descricao: (*rng.choose(catalog::CHANGE_REQUESTS)).to_string(),
        })
        .collect();

    ScopeChange {
        mudanca_escopo: true,
        descricao_mudancas: descricao,
        impacto_cronograma,
        impacto_custo,
        solicitacoes_mudanca: solicitacoes,
    }
}

/// 5-15 requirements; catalog duplicates across entries are allowed.
pub fn requirements(rng: &mut SamplerRng) -> Vec<Requirement> {
    let num = rng.uniform_i64(5, 15) as usize;
    (0..num)
        .map(|j| Requirement {
            id: format!("REQ-{:02}", j + 1),
            descricao: (*rng.choose(catalog::REQUIREMENTS)).to_string(),
        })
        .collect()
}

/// Risk catalog: 3-10 entries with probability/impact pairs and derived
/// severity.
pub fn risk_catalog(rng: &mut SamplerRng) -> Vec<Risk> {
    let num = rng.uniform_i64(3, 10) as usize;
    (0..num)
        .map(|j| {
            let probabilidade = rng.uniform_i64(1, 5) as u8;
            let impacto = rng.uniform_i64(1, 5) as u8;
            Risk {
                id: format!("R{:02}", j + 1),
                descricao: (*rng.choose(catalog::RISK_DESCRIPTIONS)).to_string(),
                probabilidade,
                impacto,
                nivel: Severity::from_score(probabilidade, impacto),
                plano_mitigacao: (*rng.choose(catalog::MITIGATION_PLANS)).to_string(),
            }
        })
        .collect()
}

/// With 40% probability, 1..=min(3, catalog size) risks from the project's
/// own catalog materialize, sampled without replacement and dated within
/// [start, now].
pub fn occurred_risks(
    rng: &mut SamplerRng,
    riscos: &[Risk],
    start: NaiveDate,
    now: NaiveDate,
) -> Vec<OccurredRisk> {
    if riscos.is_empty() || !rng.probability(0.4) {
        return Vec::new();
    }

    let max = riscos.len().min(3);
    let k = rng.uniform_i64(1, max as i64) as usize;
    rng.sample_indices(riscos.len(), k)
        .into_iter()
        .map(|idx| {
            let (impacto_real, acoes_tomadas) = *rng.choose(catalog::OCCURRED_RISK_OUTCOMES);
            OccurredRisk {
                risco_id: riscos[idx].id.clone(),
                data_ocorrencia: date_between(rng, start, now),
                impacto_real: impacto_real.to_string(),
                acoes_tomadas: acoes_tomadas.to_string(),
            }
        })
        .collect()
}

/// 3-8 stakeholders with bounded influence/interest scores.
pub fn stakeholders(rng: &mut SamplerRng) -> Vec<Stakeholder> {
    let num = rng.uniform_i64(3, 8) as usize;
    (0..num)
        .map(|_| Stakeholder {
            nome: catalog::full_name(rng),
            papel: (*rng.choose(catalog::STAKEHOLDER_ROLES)).to_string(),
            nivel_influencia: rng.uniform_i64(1, 5) as u8,
            nivel_interesse: rng.uniform_i64(1, 5) as u8,
        })
        .collect()
}

/// 3-10 communication items dated within [start, now].
pub fn communications(
    rng: &mut SamplerRng,
    start: NaiveDate,
    now: NaiveDate,
) -> Vec<CommunicationItem> {
    let num = rng.uniform_i64(3, 10) as usize;
    (0..num)
        .map(|_| CommunicationItem {
            data: date_between(rng, start, now),
            tipo: (*rng.choose(catalog::COMMUNICATION_TYPES)).to_string(),
            resumo: (*rng.choose(catalog::COMMUNICATION_SUMMARIES)).to_string(),
        })
        .collect()
}

/// 3-6 distinct quality metrics; the current value is sampled in a band
/// around the catalog target (70%..115%).
pub fn quality_metrics(rng: &mut SamplerRng) -> Vec<QualityMetric> {
    let num = rng.uniform_i64(3, 6) as usize;
    rng.sample_indices(catalog::QUALITY_METRICS.len(), num)
        .into_iter()
        .map(|idx| {
            let (nome, unidade, alvo) = catalog::QUALITY_METRICS[idx];
            QualityMetric {
                nome: nome.to_string(),
                valor_alvo: alvo,
                valor_atual: alvo * rng.uniform_f64(0.7, 1.15),
                unidade: unidade.to_string(),
            }
        })
        .collect()
}

/// 3-8 resource allocations with bounded rates and hours.
pub fn resource_allocations(rng: &mut SamplerRng) -> Vec<ResourceAllocation> {
    let num = rng.uniform_i64(3, 8) as usize;
    (0..num)
        .map(|_| ResourceAllocation {
            recurso: (*rng.choose(catalog::RESOURCE_ROLES)).to_string(),
            alocacao_percentual: rng.uniform_i64(50, 100),
            custo_hora: rng.uniform_i64(50, 250) as f64,
            horas_semanais: rng.uniform_i64(10, 40),
        })
        .collect()
}

/// 0-5 dependencies on strictly earlier projects. Projects with no earlier
/// peers (the first one) get none, which keeps the graph acyclic by
/// construction.
pub fn dependencies(
    rng: &mut SamplerRng,
    project_id: &str,
    earlier_ids: &[String],
) -> Vec<Dependency> {
    if earlier_ids.is_empty() {
        return Vec::new();
    }

    const KINDS: [DependencyKind; 3] = [
        DependencyKind::FinishToStart,
        DependencyKind::StartToStart,
        DependencyKind::FinishToFinish,
    ];

    let num = rng.uniform_i64(0, 5) as usize;
    (0..num)
        .map(|_| Dependency {
            projeto_id: project_id.to_string(),
            projeto_dependencia_id: rng.choose(earlier_ids).clone(),
            tipo: *rng.choose(&KINDS),
            descricao: (*rng.choose(catalog::DEPENDENCY_DESCRIPTIONS)).to_string(),
        })
        .collect()
}

/// 2-6 lessons learned.
pub fn lessons_learned(rng: &mut SamplerRng) -> Vec<LessonLearned> {
    let num = rng.uniform_i64(2, 6) as usize;
    (0..num)
        .map(|_| LessonLearned {
            categoria: (*rng.choose(catalog::LESSON_CATEGORIES)).to_string(),
            descricao: (*rng.choose(catalog::LESSONS_LEARNED)).to_string(),
        })
        .collect()
}

/// 3-8 critical-path tasks with sequential ids.
pub fn critical_tasks(rng: &mut SamplerRng) -> Vec<Task> {
    let num = rng.uniform_i64(3, 8) as usize;
    (0..num)
        .map(|j| Task {
            id: format!("T{:02}", j + 1),
            descricao: (*rng.choose(catalog::TASK_DESCRIPTIONS)).to_string(),
        })
        .collect()
}

/// For Delayed projects: 1..=min(3, critical count) tasks sampled without
/// replacement from the project's own critical-task list.
pub fn delayed_tasks(rng: &mut SamplerRng, criticas: &[Task]) -> Vec<Task> {
    if criticas.is_empty() {
        return Vec::new();
    }
    let max = criticas.len().min(3);
    let k = rng.uniform_i64(1, max as i64) as usize;
    rng.sample_indices(criticas.len(), k)
        .into_iter()
        .map(|idx| criticas[idx].clone())
        .collect()
}
