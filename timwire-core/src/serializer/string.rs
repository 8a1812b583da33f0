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

use crate::error::Error;
use crate::protocol::{InputProtocol, OutputProtocol};
use crate::serializer::WireValue;
use crate::types::TType;
use std::fmt;

impl WireValue for String {
    const TTYPE: TType = TType::String;

    #[inline]
    fn read_value(protocol: &mut dyn InputProtocol) -> Result<Self, Error> {
        protocol.read_string()
    }

    #[inline]
    fn write_value(&self, protocol: &mut dyn OutputProtocol) -> Result<(), Error> {
        protocol.write_string(self)
    }

    // verbatim, no quoting
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}
