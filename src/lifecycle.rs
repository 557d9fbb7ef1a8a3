// src/lifecycle.rs
//
// Lifecycle synthesizer: picks a project's temporal skeleton (start date,
// planned duration, status) and its completion trajectory. The EVM
// calculator consumes this output, so the status/completion coupling here
// is what keeps the derived metrics coherent downstream.

use chrono::{Days, NaiveDate};

use crate::catalog;
use crate::rng::SamplerRng;
use crate::types::Status;

/// Statuses and the fixed categorical distribution they are drawn from:
/// more projects in progress and delayed than completed or cancelled.
const STATUS_OPTIONS: [Status; 4] = [
    Status::InProgress,
    Status::Completed,
    Status::Delayed,
    Status::Cancelled,
];
const STATUS_WEIGHTS: [f64; 4] = [0.5, 0.2, 0.25, 0.05];

/// Temporal skeleton of one project, before EVM metrics are derived.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    pub data_inicio: NaiveDate,
    /// Planned duration in days, uniform in [30, 365].
    pub duracao_planejada: i64,
    pub data_termino_planejada: NaiveDate,
    /// Actual end for Completed/Cancelled, forecast otherwise.
    pub data_termino_real: NaiveDate,
    pub status: Status,
    /// In [1.0, 99.9] except Completed (exactly 100) and Cancelled
    /// (uniform in [10, 90]).
    pub percentual_conclusao: f64,
    /// Days past the planned end as of `now`, independent of status.
    pub atraso_atual: i64,
    pub orcamento_inicial: f64,
    /// Present only for Delayed projects.
    pub motivo_atraso: Option<String>,
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
            .unwrap_or(date)
    } else {
        date.checked_sub_days(Days::new((-days) as u64))
            .unwrap_or(date)
    }
}

/// Synthesize one project lifecycle anchored at `now`.
pub fn synthesize(rng: &mut SamplerRng, now: NaiveDate) -> Lifecycle {
    // Start between 6 months and 2 years before now.
    let start_offset = rng.uniform_i64(183, 730);
    let data_inicio = add_days(now, -start_offset);

    let duracao_planejada = rng.uniform_i64(30, 365);
    let data_termino_planejada = add_days(data_inicio, duracao_planejada);

    let status = *rng.weighted_choose(&STATUS_OPTIONS, &STATUS_WEIGHTS);

    // Integer-valued budget between 50k and 5M.
    let orcamento_inicial = rng.uniform_i64(50_000, 5_000_000) as f64;

    // Completion percentage, conditioned on status.
    let dias_decorridos = (now - data_inicio).num_days();
    let elapsed_fraction = (dias_decorridos as f64 / duracao_planejada as f64).min(1.0);

    let percentual_conclusao = match status {
        Status::Completed => 100.0,
        Status::Cancelled => rng.uniform_f64(10.0, 90.0),
        Status::InProgress => {
            // Slightly ahead or behind schedule.
            let pct = elapsed_fraction * rng.uniform_f64(0.8, 1.2);
            (pct * 100.0).clamp(1.0, 99.9)
        }
        Status::Delayed => {
            // Always below elapsed time: behind schedule by construction.
            let pct = elapsed_fraction * rng.uniform_f64(0.5, 0.9);
            (pct * 100.0).clamp(1.0, 99.9)
        }
    };

    // Actual / forecast end date.
    let data_termino_real = match status {
        Status::Completed => {
            // Early, on time, or a small slip.
            add_days(data_termino_planejada, rng.uniform_i64(-30, 30))
        }
        Status::Cancelled => {
            // Cancelled projects stop early, proportionally to completion.
            let dias = (duracao_planejada as f64 * percentual_conclusao / 100.0) as i64;
            add_days(data_inicio, dias)
        }
        Status::Delayed => {
            // Forecast is always after the plan.
            add_days(data_termino_planejada, rng.uniform_i64(10, 180))
        }
        Status::InProgress => add_days(data_termino_planejada, rng.uniform_i64(-15, 30)),
    };

    // Current delay in days, independent of status.
    let atraso_atual = (now - data_termino_planejada).num_days().max(0);

    let motivo_atraso = if status == Status::Delayed {
        Some((*rng.choose(catalog::DELAY_REASONS)).to_string())
    } else {
        None
    };

    Lifecycle {
        data_inicio,
        duracao_planejada,
        data_termino_planejada,
        data_termino_real,
        status,
        percentual_conclusao,
        atraso_atual,
        orcamento_inicial,
        motivo_atraso,
    }
}
