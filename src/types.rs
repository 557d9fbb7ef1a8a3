// src/types.rs
//
// Record types for the synthetic project portfolio.
//
// Every entity is created once during generation of its owning Project and
// never mutated afterwards. Wire keys (serde renames) are the Portuguese
// field names the downstream analysis workflow was built against, so the
// JSON/CSV output stays drop-in compatible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Serde adapter for `DD/MM/YYYY` date strings.
pub mod date_br {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%d/%m/%Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Render a date as `DD/MM/YYYY` for CSV rows and text reports.
pub fn format_date_br(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Em andamento")]
    InProgress,
    #[serde(rename = "Concluído")]
    Completed,
    #[serde(rename = "Atrasado")]
    Delayed,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl Status {
    /// Wire / report spelling of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::InProgress => "Em andamento",
            Status::Completed => "Concluído",
            Status::Delayed => "Atrasado",
            Status::Cancelled => "Cancelado",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity level of a catalog risk, derived from probability × impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "Baixo")]
    Low,
    #[serde(rename = "Médio")]
    Medium,
    #[serde(rename = "Alto")]
    High,
}

impl Severity {
    /// Derivation rule: score ≤ 6 is Low, ≤ 15 is Medium, above that High.
    pub fn from_score(probability: u8, impact: u8) -> Self {
        let score = u16::from(probability) * u16::from(impact);
        if score <= 6 {
            Severity::Low
        } else if score <= 15 {
            Severity::Medium
        } else {
            Severity::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Baixo",
            Severity::Medium => "Médio",
            Severity::High => "Alto",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency relation between two projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DependencyKind {
    #[serde(rename = "Finish-to-Start")]
    FinishToStart,
    #[serde(rename = "Start-to-Start")]
    StartToStart,
    #[serde(rename = "Finish-to-Finish")]
    FinishToFinish,
}

impl DependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::FinishToStart => "Finish-to-Start",
            DependencyKind::StartToStart => "Start-to-Start",
            DependencyKind::FinishToFinish => "Finish-to-Finish",
        }
    }
}

/// Earned-value snapshot embedded in each project.
///
/// Invariants (enforced by the EVM calculator, checked by tests):
///   eac = custo_real_atual + etc
///   vac = orcamento_inicial - eac
///   valor_agregado = orcamento_inicial * percentual_conclusao / 100
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvmSnapshot {
    /// Planned value (PV): budget × elapsed schedule fraction.
    pub valor_planejado: f64,
    /// Earned value (EV): budget × completion fraction.
    pub valor_agregado: f64,
    /// Actual cost (AC).
    pub custo_real_atual: f64,
    /// Schedule performance index.
    pub spi: f64,
    /// Cost performance index.
    pub cpi: f64,
    /// Estimate to complete.
    pub etc: f64,
    /// Estimate at completion.
    pub eac: f64,
    /// Variance at completion.
    pub vac: f64,
    /// Budget deviation vs. planned-to-date spend, in percent.
    pub desvio_orcamento: f64,
}

/// Actual cost split into fixed categories. The decomposer normalizes the
/// categories so they sum exactly to `custo_real_atual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    #[serde(rename = "Pessoal")]
    pub pessoal: f64,
    #[serde(rename = "Equipamentos")]
    pub equipamentos: f64,
    #[serde(rename = "Software")]
    pub software: f64,
    #[serde(rename = "Serviços")]
    pub servicos: f64,
    #[serde(rename = "Outros")]
    pub outros: f64,
}

impl CostBreakdown {
    pub fn zero() -> Self {
        Self {
            pessoal: 0.0,
            equipamentos: 0.0,
            software: 0.0,
            servicos: 0.0,
            outros: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.pessoal + self.equipamentos + self.software + self.servicos + self.outros
    }

    /// (label, amount) pairs in the fixed category order, for reports.
    pub fn as_pairs(&self) -> [(&'static str, f64); 5] {
        [
            ("Pessoal", self.pessoal),
            ("Equipamentos", self.equipamentos),
            ("Software", self.software),
            ("Serviços", self.servicos),
            ("Outros", self.outros),
        ]
    }
}

/// A single formal change request attached to a scope change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRequest {
    /// Sequential identifier, `SCM-01`, `SCM-02`, ...
    pub id: String,
    pub descricao: String,
}

/// Scope-change block of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeChange {
    /// Whether any scope change happened on this project.
    pub mudanca_escopo: bool,
    /// "N/A" when no change happened.
    pub descricao_mudancas: String,
    /// Schedule impact in days (0 when no change).
    pub impacto_cronograma: i64,
    /// Cost impact in currency (0 when no change).
    pub impacto_custo: f64,
    pub solicitacoes_mudanca: Vec<ChangeRequest>,
}

/// A single requirement; duplicates of the catalog text across entries are
/// allowed, ids are sequential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Sequential identifier, `REQ-01`, `REQ-02`, ...
    pub id: String,
    pub descricao: String,
}

/// Catalog risk: something that may happen to the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    /// Sequential identifier within the project, `R01`, `R02`, ...
    pub id: String,
    pub descricao: String,
    /// 1–5.
    pub probabilidade: u8,
    /// 1–5.
    pub impacto: u8,
    pub nivel: Severity,
    pub plano_mitigacao: String,
}

/// A risk from the project's own catalog that actually materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccurredRisk {
    /// Must reference an id in the owning project's risk catalog.
    pub risco_id: String,
    /// Falls within [data_inicio, now].
    #[serde(with = "date_br")]
    pub data_ocorrencia: NaiveDate,
    pub impacto_real: String,
    pub acoes_tomadas: String,
}

/// Cross-project dependency. The prerequisite always references a project
/// generated strictly earlier in the run, so the graph is acyclic by
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    /// Dependent project id (the owner of this record).
    pub projeto_id: String,
    /// Prerequisite project id (strictly earlier in the sequence).
    pub projeto_dependencia_id: String,
    pub tipo: DependencyKind,
    pub descricao: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stakeholder {
    pub nome: String,
    pub papel: String,
    /// 1–5.
    pub nivel_influencia: u8,
    /// 1–5.
    pub nivel_interesse: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationItem {
    #[serde(with = "date_br")]
    pub data: NaiveDate,
    pub tipo: String,
    pub resumo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityMetric {
    pub nome: String,
    pub valor_alvo: f64,
    pub valor_atual: f64,
    pub unidade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceAllocation {
    pub recurso: String,
    /// 50–100.
    pub alocacao_percentual: i64,
    /// 50–250, currency per hour.
    pub custo_hora: f64,
    /// 10–40.
    pub horas_semanais: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonLearned {
    pub categoria: String,
    pub descricao: String,
}

/// A critical-path task. Delayed projects additionally carry a
/// without-replacement subset of these as `tarefas_atrasadas`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Sequential identifier within the project, `T01`, `T02`, ...
    pub id: String,
    pub descricao: String,
}

/// Root aggregate: one fully assembled project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable sequential id, `PROJ-0001`, `PROJ-0002`, ...
    pub id: String,
    pub nome: String,
    #[serde(with = "date_br")]
    pub data_inicio: NaiveDate,
    #[serde(with = "date_br")]
    pub data_termino_planejada: NaiveDate,
    /// Actual end for finished/cancelled projects, forecast otherwise.
    #[serde(with = "date_br")]
    pub data_termino_real: NaiveDate,
    /// Planned duration in days.
    pub duracao_planejada: i64,
    pub orcamento_inicial: f64,
    pub gerente: String,
    pub status: Status,
    pub percentual_conclusao: f64,
    /// Days past the planned end date as of "now" (0 if not past).
    pub atraso_atual: i64,
    /// Present only for Delayed projects.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub motivo_atraso: Option<String>,
    #[serde(flatten)]
    pub evm: EvmSnapshot,
    pub categorias_custos: CostBreakdown,
    pub escopo: ScopeChange,
    pub requisitos: Vec<Requirement>,
    pub riscos: Vec<Risk>,
    pub riscos_ocorridos: Vec<OccurredRisk>,
    pub partes_interessadas: Vec<Stakeholder>,
    pub comunicacoes: Vec<CommunicationItem>,
    pub metricas_qualidade: Vec<QualityMetric>,
    pub alocacao_recursos: Vec<ResourceAllocation>,
    pub dependencias: Vec<Dependency>,
    pub licoes_aprendidas: Vec<LessonLearned>,
    pub tarefas_criticas: Vec<Task>,
    pub tarefas_atrasadas: Vec<Task>,
}
