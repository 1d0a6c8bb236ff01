// Copyright 2025 the Cropper Authors
// SPDX-License-Identifier: Apache-2.0

//! Cropper: crop an image by replaying a recorded pointer script

fn main() -> anyhow::Result<()> {
    cropper::run()
}
