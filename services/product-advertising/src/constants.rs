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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Fixed protocol values.
pub const SERVICE_NAME: &str = "AWSEcommerceService";
pub const API_VERSION: &str = "2011-08-01";
pub const REQUEST_METHOD: &str = "GET";
pub const REQUEST_PATH: &str = "/onca/xml";

// Authentication parameters merged into every request.
pub const AWS_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const SERVICE: &str = "Service";
pub const ASSOCIATE_TAG: &str = "AssociateTag";
pub const VERSION: &str = "Version";
pub const TIMESTAMP: &str = "Timestamp";
pub const SIGNATURE: &str = "Signature";

// Operation parameters.
pub const OPERATION: &str = "Operation";
pub const ITEM_ID: &str = "ItemId";
pub const ID_TYPE: &str = "IdType";
pub const RESPONSE_GROUP: &str = "ResponseGroup";
pub const SEARCH_INDEX: &str = "SearchIndex";
pub const KEYWORDS: &str = "Keywords";
pub const SORT: &str = "Sort";

pub const OPERATION_ITEM_LOOKUP: &str = "ItemLookup";
pub const OPERATION_ITEM_SEARCH: &str = "ItemSearch";

// Env values used by product advertising.
pub const ENV_ACCESS_KEY_ID: &str = "AWSKey";
pub const ENV_SECRET_ACCESS_KEY: &str = "AWSSecret";
pub const ENV_ASSOCIATE_TAG: &str = "ATag";
pub const ENV_REGION: &str = "AWSRegion";

/// AsciiSet for the request signature.
///
/// Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// Bytes outside ASCII are always encoded.
pub static PAAPI_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
