// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

pub use strict_num::{FiniteF32, NonZeroPositiveF32, NormalizedF32};
