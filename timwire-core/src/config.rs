// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Limits shared by the [`Codec`](crate::codec::Codec) and every protocol it creates.
///
/// The limits guard against hostile input: a declared string length or
/// container count above the limit fails before any allocation, and a struct
/// nested deeper than `max_depth` fails before recursing.
#[derive(Clone, Debug)]
pub struct Config {
    /// Maximum struct nesting depth, counting the outermost struct as 1.
    pub max_depth: u32,
    /// Maximum byte length of a single string or binary value.
    pub max_string_size: usize,
    /// Maximum element count of a single list, set or map.
    pub max_container_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: 64,
            max_string_size: 16 * 1024 * 1024,
            max_container_size: 1 << 20,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline(always)]
    pub fn max_string_size(&self) -> usize {
        self.max_string_size
    }

    #[inline(always)]
    pub fn max_container_size(&self) -> usize {
        self.max_container_size
    }
}
