// SPDX-License-Identifier: BUSL-1.1
//! API route modules.

pub mod campaigns;
