// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

// N-D dataset container with KD-tree neighbour queries, used by the kNN estimator

pub mod dataset;
