// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

mod commit;
mod stage;
mod vocabulary;

pub use commit::*;
pub use stage::*;
pub use vocabulary::*;
