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

macro_rules! impl_num_value {
    ($ty:ty, $ttype:expr, $writer:ident, $reader:ident) => {
        impl WireValue for $ty {
            const TTYPE: TType = $ttype;

            #[inline(always)]
            fn read_value(protocol: &mut dyn InputProtocol) -> Result<Self, Error> {
                protocol.$reader()
            }

            #[inline(always)]
            fn write_value(&self, protocol: &mut dyn OutputProtocol) -> Result<(), Error> {
                protocol.$writer(*self)
            }

            fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }
    };
}

impl_num_value!(bool, TType::Bool, write_bool, read_bool);
impl_num_value!(i8, TType::I08, write_byte, read_byte);
impl_num_value!(i16, TType::I16, write_i16, read_i16);
impl_num_value!(i32, TType::I32, write_i32, read_i32);
impl_num_value!(i64, TType::I64, write_i64, read_i64);
impl_num_value!(f64, TType::Double, write_double, read_double);
