// src/report.rs
//
// Per-project plain-text status reports, one per management area
// (cronograma, custos, escopo, riscos).
//
// The downstream analysis workflow reads these files by the path convention
// status_files/<id>_<area>.txt and parses them by line prefix, so the
// section headers and field order below are a stable contract: do not
// reorder or rename lines without versioning the consumer.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::types::{format_date_br, Project, Status};

/// Subdirectory receiving the report files.
pub const STATUS_DIR: &str = "status_files";

/// The four report areas, in file-naming order.
pub const AREAS: [&str; 4] = ["cronograma", "custos", "escopo", "riscos"];

fn header(title: &str, p: &Project) -> String {
    let mut s = String::new();
    let line = format!("RELATÓRIO DE STATUS DE {} - {}", title, p.id);
    s.push_str(&line);
    s.push('\n');
    s.push_str(&"=".repeat(line.chars().count()));
    s.push('\n');
    s.push_str(&format!("Projeto: {}\n", p.nome));
    s.push_str(&format!("Gerente: {}\n", p.gerente));
    s.push_str(&format!("Status: {}\n", p.status));
    s.push('\n');
    s
}

/// Schedule report: dates, delay, SPI and the critical/delayed task lists.
pub fn schedule_report(p: &Project) -> String {
    let mut s = header("CRONOGRAMA", p);

    s.push_str("CRONOGRAMA\n");
    s.push_str(&format!("Data de início: {}\n", format_date_br(p.data_inicio)));
    s.push_str(&format!(
        "Data de término planejada: {}\n",
        format_date_br(p.data_termino_planejada)
    ));
    s.push_str(&format!(
        "Data de término real/prevista: {}\n",
        format_date_br(p.data_termino_real)
    ));
    s.push_str(&format!("Duração planejada (dias): {}\n", p.duracao_planejada));
    s.push_str(&format!("Atraso atual (dias): {}\n", p.atraso_atual));
    if let Some(motivo) = &p.motivo_atraso {
        s.push_str(&format!("Motivo do atraso: {}\n", motivo));
    }
    s.push_str(&format!(
        "Percentual de conclusão: {:.2}%\n",
        p.percentual_conclusao
    ));
    s.push_str(&format!(
        "SPI (Índice de Desempenho de Prazo): {:.3}\n",
        p.evm.spi
    ));

    s.push_str("\nTAREFAS CRÍTICAS\n");
    for t in &p.tarefas_criticas {
        s.push_str(&format!("- {}: {}\n", t.id, t.descricao));
    }

    if p.status == Status::Delayed {
        s.push_str("\nTAREFAS ATRASADAS\n");
        for t in &p.tarefas_atrasadas {
            s.push_str(&format!("- {}: {}\n", t.id, t.descricao));
        }
    }

    s
}

/// Cost report: budget, EVM cost metrics and the category split.
pub fn cost_report(p: &Project) -> String {
    let mut s = header("CUSTOS", p);

    s.push_str("CUSTOS\n");
    s.push_str(&format!("Orçamento inicial: R$ {:.2}\n", p.orcamento_inicial));
    s.push_str(&format!(
        "Valor planejado (PV): R$ {:.2}\n",
        p.evm.valor_planejado
    ));
    s.push_str(&format!(
        "Valor agregado (EV): R$ {:.2}\n",
        p.evm.valor_agregado
    ));
    s.push_str(&format!(
        "Custo real atual (AC): R$ {:.2}\n",
        p.evm.custo_real_atual
    ));
    s.push_str(&format!(
        "CPI (Índice de Desempenho de Custo): {:.3}\n",
        p.evm.cpi
    ));
    s.push_str(&format!(
        "Estimativa para terminar (ETC): R$ {:.2}\n",
        p.evm.etc
    ));
    s.push_str(&format!("Estimativa no término (EAC): R$ {:.2}\n", p.evm.eac));
    s.push_str(&format!("Variação no término (VAC): R$ {:.2}\n", p.evm.vac));
    s.push_str(&format!(
        "Desvio de orçamento: {:.2}%\n",
        p.evm.desvio_orcamento
    ));

    s.push_str("\nCATEGORIAS DE CUSTO\n");
    for (nome, valor) in p.categorias_custos.as_pairs() {
        s.push_str(&format!("{}: R$ {:.2}\n", nome, valor));
    }

    s
}

/// Scope report: change flag, impacts, change requests and requirements.
pub fn scope_report(p: &Project) -> String {
    let mut s = header("ESCOPO", p);

    s.push_str("MUDANÇAS DE ESCOPO\n");
    s.push_str(&format!(
        "Houve mudança de escopo: {}\n",
        if p.escopo.mudanca_escopo { "Sim" } else { "Não" }
    ));
    s.push_str(&format!(
        "Descrição das mudanças: {}\n",
        p.escopo.descricao_mudancas
    ));
    s.push_str(&format!(
        "Impacto no cronograma (dias): {}\n",
        p.escopo.impacto_cronograma
    ));
    s.push_str(&format!("Impacto no custo: R$ {:.2}\n", p.escopo.impacto_custo));

    if !p.escopo.solicitacoes_mudanca.is_empty() {
        s.push_str("\nSOLICITAÇÕES DE MUDANÇA\n");
        for sc in &p.escopo.solicitacoes_mudanca {
            s.push_str(&format!("- {}: {}\n", sc.id, sc.descricao));
        }
    }

    s.push_str("\nREQUISITOS\n");
    for r in &p.requisitos {
        s.push_str(&format!("- {}: {}\n", r.id, r.descricao));
    }

    s
}

/// Risk report: the catalog with severity, then the occurrences.
pub fn risk_report(p: &Project) -> String {
    let mut s = header("RISCOS", p);

    s.push_str("RISCOS IDENTIFICADOS\n");
    for r in &p.riscos {
        s.push_str(&format!(
            "- {} [{}] (probabilidade {}, impacto {}): {} | Mitigação: {}\n",
            r.id, r.nivel, r.probabilidade, r.impacto, r.descricao, r.plano_mitigacao
        ));
    }

    s.push_str("\nRISCOS OCORRIDOS\n");
    if p.riscos_ocorridos.is_empty() {
        s.push_str("Nenhum risco ocorrido até o momento.\n");
    } else {
        for o in &p.riscos_ocorridos {
            s.push_str(&format!(
                "- {} em {}: {} | Ações: {}\n",
                o.risco_id,
                format_date_br(o.data_ocorrencia),
                o.impacto_real,
                o.acoes_tomadas
            ));
        }
    }

    s
}

/// Write the four reports for every project under `out_dir/status_files/`.
pub fn write_status_files(projetos: &[Project], out_dir: &Path) -> Result<()> {
    let dir = out_dir.join(STATUS_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create status dir {}", dir.display()))?;

    for p in projetos {
        let reports = [
            ("cronograma", schedule_report(p)),
            ("custos", cost_report(p)),
            ("escopo", scope_report(p)),
            ("riscos", risk_report(p)),
        ];
        for (area, body) in reports {
            let path = dir.join(format!("{}_{}.txt", p.id, area));
            fs::write(&path, body)
                .with_context(|| format!("Failed to write report {}", path.display()))?;
        }
    }

    Ok(())
}
