// src/evm.rs
//
// Earned Value Management calculator.
//
// Derives PV/EV/AC and the indices/forecasts from a project lifecycle,
// with status-conditioned bounds so the metrics stay coherent with the
// lifecycle label (Delayed projects look behind schedule, troubled
// projects run over cost). All divisions are guarded locally; this module
// never signals an error to the caller.

use chrono::NaiveDate;

use crate::lifecycle::Lifecycle;
use crate::rng::SamplerRng;
use crate::types::{EvmSnapshot, Status};

/// Compute the EVM snapshot for one lifecycle, anchored at `now`.
pub fn compute(rng: &mut SamplerRng, lc: &Lifecycle, now: NaiveDate) -> EvmSnapshot {
    let budget = lc.orcamento_inicial;

    let dias_decorridos = (now - lc.data_inicio).num_days();
    let elapsed_fraction = (dias_decorridos as f64 / lc.duracao_planejada as f64).min(1.0);

    let pv = budget * elapsed_fraction;
    let ev = budget * lc.percentual_conclusao / 100.0;

    // Actual cost with status-conditioned variation: troubled projects
    // (Delayed/Cancelled) only ever run at or over earned value.
    let ac_variation = match lc.status {
        Status::InProgress | Status::Completed => rng.uniform_f64(0.8, 1.2),
        Status::Delayed | Status::Cancelled => rng.uniform_f64(1.0, 1.5),
    };
    let ac = if ev == 0.0 { 0.0 } else { ev * ac_variation };

    // Raw indices. Zero denominators fall back to the neutral 1.0, which is
    // what downstream consumers expect for not-yet-started work.
    let raw_spi = if pv > 0.0 { ev / pv } else { 1.0 };
    let cpi = if ac > 0.0 { ev / ac } else { 1.0 };

    // Status-conditioned SPI override, applied after the raw ratio. For
    // InProgress/Completed the ratio is discarded and resampled inside the
    // status band; downstream consumers rely on these bounded ranges.
    let spi = match lc.status {
        Status::Delayed => raw_spi.min(0.9),
        Status::InProgress => rng.uniform_f64(0.85, 1.15),
        Status::Completed => rng.uniform_f64(0.95, 1.1),
        Status::Cancelled => raw_spi,
    };

    let etc = if cpi > 0.0 && lc.percentual_conclusao < 100.0 {
        (budget - ev) / cpi
    } else {
        0.0
    };
    let eac = ac + etc;
    let vac = budget - eac;

    let desvio_orcamento = if elapsed_fraction > 0.0 {
        (ac / (budget * elapsed_fraction) - 1.0) * 100.0
    } else {
        0.0
    };

    EvmSnapshot {
        valor_planejado: pv,
        valor_agregado: ev,
        custo_real_atual: ac,
        spi,
        cpi,
        etc,
        eac,
        vac,
        desvio_orcamento,
    }
}
