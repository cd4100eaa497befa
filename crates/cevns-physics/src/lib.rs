// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor CEvNS — CEvNS Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Coherent elastic neutrino-nucleus scattering near a reactor.
//!
//! Pipeline: reactor spectrum → spectrum-weighted cross section (Helm form
//! factor inside) → detector event rate, composed by `CevnsExperiment`.

pub mod cross_section;
pub mod event_rate;
pub mod experiment;
pub mod form_factor;
pub mod reactor;
pub mod spectrum;
pub mod target;
