//! CSS substitution tables.
//!
//! Nine fixed tables drive the three cipher paths. `CSS_TAB1` through
//! `CSS_TAB5` feed the key and sector keystreams: `CSS_TAB3` is an 8-byte
//! pattern replicated across its 9-bit index, `CSS_TAB4` reverses the bits
//! of its index, and `CSS_TAB5` is the complemented reversal. `CRYPT_TAB0`
//! through `CRYPT_TAB3` are the authentication-round S-boxes. All nine are
//! embedded verbatim so the data can be audited against other
//! implementations.

pub const CSS_TAB1: [u8; 256] = [
    0x33, 0x73, 0x3b, 0x26, 0x63, 0x23, 0x6b, 0x76, 0x3e, 0x7e, 0x36, 0x2b, 0x6e, 0x2e, 0x66, 0x7b,
    0xd3, 0x93, 0xdb, 0x06, 0x43, 0x03, 0x4b, 0x96, 0xde, 0x9e, 0xd6, 0x0b, 0x4e, 0x0e, 0x46, 0x9b,
    0x57, 0x17, 0x5f, 0x82, 0xc7, 0x87, 0xcf, 0x12, 0x5a, 0x1a, 0x52, 0x8f, 0xca, 0x8a, 0xc2, 0x1f,
    0xd9, 0x99, 0xd1, 0x00, 0x49, 0x09, 0x41, 0x90, 0xd8, 0x98, 0xd0, 0x01, 0x48, 0x08, 0x40, 0x91,
    0x3d, 0x7d, 0x35, 0x24, 0x6d, 0x2d, 0x65, 0x74, 0x3c, 0x7c, 0x34, 0x25, 0x6c, 0x2c, 0x64, 0x75,
    0xdd, 0x9d, 0xd5, 0x04, 0x4d, 0x0d, 0x45, 0x94, 0xdc, 0x9c, 0xd4, 0x05, 0x4c, 0x0c, 0x44, 0x95,
    0x59, 0x19, 0x51, 0x80, 0xc9, 0x89, 0xc1, 0x10, 0x58, 0x18, 0x50, 0x81, 0xc8, 0x88, 0xc0, 0x11,
    0xd7, 0x97, 0xdf, 0x02, 0x47, 0x07, 0x4f, 0x92, 0xda, 0x9a, 0xd2, 0x0f, 0x4a, 0x0a, 0x42, 0x9f,
    0x53, 0x13, 0x5b, 0x86, 0xc3, 0x83, 0xcb, 0x16, 0x5e, 0x1e, 0x56, 0x8b, 0xce, 0x8e, 0xc6, 0x1b,
    0xb3, 0xf3, 0xbb, 0xa6, 0xe3, 0xa3, 0xeb, 0xf6, 0xbe, 0xfe, 0xb6, 0xab, 0xee, 0xae, 0xe6, 0xfb,
    0x37, 0x77, 0x3f, 0x22, 0x67, 0x27, 0x6f, 0x72, 0x3a, 0x7a, 0x32, 0x2f, 0x6a, 0x2a, 0x62, 0x7f,
    0xb9, 0xf9, 0xb1, 0xa0, 0xe9, 0xa9, 0xe1, 0xf0, 0xb8, 0xf8, 0xb0, 0xa1, 0xe8, 0xa8, 0xe0, 0xf1,
    0x5d, 0x1d, 0x55, 0x84, 0xcd, 0x8d, 0xc5, 0x14, 0x5c, 0x1c, 0x54, 0x85, 0xcc, 0x8c, 0xc4, 0x15,
    0xbd, 0xfd, 0xb5, 0xa4, 0xed, 0xad, 0xe5, 0xf4, 0xbc, 0xfc, 0xb4, 0xa5, 0xec, 0xac, 0xe4, 0xf5,
    0x39, 0x79, 0x31, 0x20, 0x69, 0x29, 0x61, 0x70, 0x38, 0x78, 0x30, 0x21, 0x68, 0x28, 0x60, 0x71,
    0xb7, 0xf7, 0xbf, 0xa2, 0xe7, 0xa7, 0xef, 0xf2, 0xba, 0xfa, 0xb2, 0xaf, 0xea, 0xaa, 0xe2, 0xff,
];

pub const CSS_TAB2: [u8; 256] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x09, 0x08, 0x0b, 0x0a, 0x0d, 0x0c, 0x0f, 0x0e,
    0x12, 0x13, 0x10, 0x11, 0x16, 0x17, 0x14, 0x15, 0x1b, 0x1a, 0x19, 0x18, 0x1f, 0x1e, 0x1d, 0x1c,
    0x24, 0x25, 0x26, 0x27, 0x20, 0x21, 0x22, 0x23, 0x2d, 0x2c, 0x2f, 0x2e, 0x29, 0x28, 0x2b, 0x2a,
    0x36, 0x37, 0x34, 0x35, 0x32, 0x33, 0x30, 0x31, 0x3f, 0x3e, 0x3d, 0x3c, 0x3b, 0x3a, 0x39, 0x38,
    0x49, 0x48, 0x4b, 0x4a, 0x4d, 0x4c, 0x4f, 0x4e, 0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47,
    0x5b, 0x5a, 0x59, 0x58, 0x5f, 0x5e, 0x5d, 0x5c, 0x52, 0x53, 0x50, 0x51, 0x56, 0x57, 0x54, 0x55,
    0x6d, 0x6c, 0x6f, 0x6e, 0x69, 0x68, 0x6b, 0x6a, 0x64, 0x65, 0x66, 0x67, 0x60, 0x61, 0x62, 0x63,
    0x7f, 0x7e, 0x7d, 0x7c, 0x7b, 0x7a, 0x79, 0x78, 0x76, 0x77, 0x74, 0x75, 0x72, 0x73, 0x70, 0x71,
    0x92, 0x93, 0x90, 0x91, 0x96, 0x97, 0x94, 0x95, 0x9b, 0x9a, 0x99, 0x98, 0x9f, 0x9e, 0x9d, 0x9c,
    0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x89, 0x88, 0x8b, 0x8a, 0x8d, 0x8c, 0x8f, 0x8e,
    0xb6, 0xb7, 0xb4, 0xb5, 0xb2, 0xb3, 0xb0, 0xb1, 0xbf, 0xbe, 0xbd, 0xbc, 0xbb, 0xba, 0xb9, 0xb8,
    0xa4, 0xa5, 0xa6, 0xa7, 0xa0, 0xa1, 0xa2, 0xa3, 0xad, 0xac, 0xaf, 0xae, 0xa9, 0xa8, 0xab, 0xaa,
    0xdb, 0xda, 0xd9, 0xd8, 0xdf, 0xde, 0xdd, 0xdc, 0xd2, 0xd3, 0xd0, 0xd1, 0xd6, 0xd7, 0xd4, 0xd5,
    0xc9, 0xc8, 0xcb, 0xca, 0xcd, 0xcc, 0xcf, 0xce, 0xc0, 0xc1, 0xc2, 0xc3, 0xc4, 0xc5, 0xc6, 0xc7,
    0xff, 0xfe, 0xfd, 0xfc, 0xfb, 0xfa, 0xf9, 0xf8, 0xf6, 0xf7, 0xf4, 0xf5, 0xf2, 0xf3, 0xf0, 0xf1,
    0xed, 0xec, 0xef, 0xee, 0xe9, 0xe8, 0xeb, 0xea, 0xe4, 0xe5, 0xe6, 0xe7, 0xe0, 0xe1, 0xe2, 0xe3,
];

pub const CSS_TAB3: [u8; 512] = [
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
    0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff, 0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff,
];

pub const CSS_TAB4: [u8; 256] = [
    0x00, 0x80, 0x40, 0xc0, 0x20, 0xa0, 0x60, 0xe0, 0x10, 0x90, 0x50, 0xd0, 0x30, 0xb0, 0x70, 0xf0,
    0x08, 0x88, 0x48, 0xc8, 0x28, 0xa8, 0x68, 0xe8, 0x18, 0x98, 0x58, 0xd8, 0x38, 0xb8, 0x78, 0xf8,
    0x04, 0x84, 0x44, 0xc4, 0x24, 0xa4, 0x64, 0xe4, 0x14, 0x94, 0x54, 0xd4, 0x34, 0xb4, 0x74, 0xf4,
    0x0c, 0x8c, 0x4c, 0xcc, 0x2c, 0xac, 0x6c, 0xec, 0x1c, 0x9c, 0x5c, 0xdc, 0x3c, 0xbc, 0x7c, 0xfc,
    0x02, 0x82, 0x42, 0xc2, 0x22, 0xa2, 0x62, 0xe2, 0x12, 0x92, 0x52, 0xd2, 0x32, 0xb2, 0x72, 0xf2,
    0x0a, 0x8a, 0x4a, 0xca, 0x2a, 0xaa, 0x6a, 0xea, 0x1a, 0x9a, 0x5a, 0xda, 0x3a, 0xba, 0x7a, 0xfa,
    0x06, 0x86, 0x46, 0xc6, 0x26, 0xa6, 0x66, 0xe6, 0x16, 0x96, 0x56, 0xd6, 0x36, 0xb6, 0x76, 0xf6,
    0x0e, 0x8e, 0x4e, 0xce, 0x2e, 0xae, 0x6e, 0xee, 0x1e, 0x9e, 0x5e, 0xde, 0x3e, 0xbe, 0x7e, 0xfe,
    0x01, 0x81, 0x41, 0xc1, 0x21, 0xa1, 0x61, 0xe1, 0x11, 0x91, 0x51, 0xd1, 0x31, 0xb1, 0x71, 0xf1,
    0x09, 0x89, 0x49, 0xc9, 0x29, 0xa9, 0x69, 0xe9, 0x19, 0x99, 0x59, 0xd9, 0x39, 0xb9, 0x79, 0xf9,
    0x05, 0x85, 0x45, 0xc5, 0x25, 0xa5, 0x65, 0xe5, 0x15, 0x95, 0x55, 0xd5, 0x35, 0xb5, 0x75, 0xf5,
    0x0d, 0x8d, 0x4d, 0xcd, 0x2d, 0xad, 0x6d, 0xed, 0x1d, 0x9d, 0x5d, 0xdd, 0x3d, 0xbd, 0x7d, 0xfd,
    0x03, 0x83, 0x43, 0xc3, 0x23, 0xa3, 0x63, 0xe3, 0x13, 0x93, 0x53, 0xd3, 0x33, 0xb3, 0x73, 0xf3,
    0x0b, 0x8b, 0x4b, 0xcb, 0x2b, 0xab, 0x6b, 0xeb, 0x1b, 0x9b, 0x5b, 0xdb, 0x3b, 0xbb, 0x7b, 0xfb,
    0x07, 0x87, 0x47, 0xc7, 0x27, 0xa7, 0x67, 0xe7, 0x17, 0x97, 0x57, 0xd7, 0x37, 0xb7, 0x77, 0xf7,
    0x0f, 0x8f, 0x4f, 0xcf, 0x2f, 0xaf, 0x6f, 0xef, 0x1f, 0x9f, 0x5f, 0xdf, 0x3f, 0xbf, 0x7f, 0xff,
];

pub const CSS_TAB5: [u8; 256] = [
    0xff, 0x7f, 0xbf, 0x3f, 0xdf, 0x5f, 0x9f, 0x1f, 0xef, 0x6f, 0xaf, 0x2f, 0xcf, 0x4f, 0x8f, 0x0f,
    0xf7, 0x77, 0xb7, 0x37, 0xd7, 0x57, 0x97, 0x17, 0xe7, 0x67, 0xa7, 0x27, 0xc7, 0x47, 0x87, 0x07,
    0xfb, 0x7b, 0xbb, 0x3b, 0xdb, 0x5b, 0x9b, 0x1b, 0xeb, 0x6b, 0xab, 0x2b, 0xcb, 0x4b, 0x8b, 0x0b,
    0xf3, 0x73, 0xb3, 0x33, 0xd3, 0x53, 0x93, 0x13, 0xe3, 0x63, 0xa3, 0x23, 0xc3, 0x43, 0x83, 0x03,
    0xfd, 0x7d, 0xbd, 0x3d, 0xdd, 0x5d, 0x9d, 0x1d, 0xed, 0x6d, 0xad, 0x2d, 0xcd, 0x4d, 0x8d, 0x0d,
    0xf5, 0x75, 0xb5, 0x35, 0xd5, 0x55, 0x95, 0x15, 0xe5, 0x65, 0xa5, 0x25, 0xc5, 0x45, 0x85, 0x05,
    0xf9, 0x79, 0xb9, 0x39, 0xd9, 0x59, 0x99, 0x19, 0xe9, 0x69, 0xa9, 0x29, 0xc9, 0x49, 0x89, 0x09,
    0xf1, 0x71, 0xb1, 0x31, 0xd1, 0x51, 0x91, 0x11, 0xe1, 0x61, 0xa1, 0x21, 0xc1, 0x41, 0x81, 0x01,
    0xfe, 0x7e, 0xbe, 0x3e, 0xde, 0x5e, 0x9e, 0x1e, 0xee, 0x6e, 0xae, 0x2e, 0xce, 0x4e, 0x8e, 0x0e,
    0xf6, 0x76, 0xb6, 0x36, 0xd6, 0x56, 0x96, 0x16, 0xe6, 0x66, 0xa6, 0x26, 0xc6, 0x46, 0x86, 0x06,
    0xfa, 0x7a, 0xba, 0x3a, 0xda, 0x5a, 0x9a, 0x1a, 0xea, 0x6a, 0xaa, 0x2a, 0xca, 0x4a, 0x8a, 0x0a,
    0xf2, 0x72, 0xb2, 0x32, 0xd2, 0x52, 0x92, 0x12, 0xe2, 0x62, 0xa2, 0x22, 0xc2, 0x42, 0x82, 0x02,
    0xfc, 0x7c, 0xbc, 0x3c, 0xdc, 0x5c, 0x9c, 0x1c, 0xec, 0x6c, 0xac, 0x2c, 0xcc, 0x4c, 0x8c, 0x0c,
    0xf4, 0x74, 0xb4, 0x34, 0xd4, 0x54, 0x94, 0x14, 0xe4, 0x64, 0xa4, 0x24, 0xc4, 0x44, 0x84, 0x04,
    0xf8, 0x78, 0xb8, 0x38, 0xd8, 0x58, 0x98, 0x18, 0xe8, 0x68, 0xa8, 0x28, 0xc8, 0x48, 0x88, 0x08,
    0xf0, 0x70, 0xb0, 0x30, 0xd0, 0x50, 0x90, 0x10, 0xe0, 0x60, 0xa0, 0x20, 0xc0, 0x40, 0x80, 0x00,
];

pub const CRYPT_TAB0: [u8; 256] = [
    0xb7, 0xf4, 0x82, 0x57, 0xda, 0x4d, 0xdb, 0xe2, 0x2f, 0x52, 0x1a, 0xa8, 0x68, 0x5a, 0x8a, 0xff,
    0xfb, 0x2e, 0x6d, 0x09, 0x8b, 0xd3, 0x9d, 0xb1, 0x70, 0x4c, 0xb6, 0x94, 0xab, 0xa6, 0x22, 0xc5,
    0xaa, 0x6a, 0x37, 0x73, 0x7f, 0x76, 0xc8, 0x3a, 0x87, 0x96, 0xd9, 0x0d, 0x12, 0x2d, 0xa7, 0xf0,
    0x14, 0xdf, 0x45, 0x4f, 0xc4, 0x3f, 0x01, 0x44, 0x63, 0x30, 0x5b, 0x8e, 0x58, 0x2c, 0xc7, 0x5e,
    0x5c, 0x36, 0xde, 0x78, 0xba, 0xec, 0x24, 0x53, 0xef, 0xc0, 0x71, 0x28, 0x04, 0x88, 0x33, 0xb3,
    0xbc, 0x9a, 0x85, 0x1d, 0x95, 0x4b, 0x91, 0x69, 0xd7, 0xce, 0x21, 0xeb, 0xe7, 0x42, 0x2a, 0x32,
    0x79, 0xf8, 0x46, 0x08, 0x23, 0xe1, 0xa3, 0xa9, 0x92, 0xbf, 0xfe, 0x66, 0x83, 0xf7, 0x00, 0xd6,
    0x38, 0x8f, 0x9f, 0xdd, 0x81, 0x5d, 0x93, 0xe9, 0x65, 0xaf, 0x0f, 0xd5, 0xc9, 0xe4, 0x49, 0xf3,
    0xe3, 0x98, 0xfa, 0xb2, 0x43, 0xb0, 0x77, 0x17, 0x7c, 0x29, 0x51, 0xd2, 0x27, 0x59, 0x3e, 0xa2,
    0x11, 0xf6, 0x20, 0xca, 0xa4, 0x67, 0x34, 0x75, 0xe8, 0x0b, 0x54, 0x13, 0x1f, 0x97, 0xd0, 0xd8,
    0x6f, 0xa0, 0x25, 0xb4, 0xae, 0xf1, 0x9b, 0x41, 0x18, 0xfc, 0x26, 0xd4, 0xbd, 0x0e, 0x16, 0xc1,
    0xe0, 0x7d, 0x0c, 0xea, 0x39, 0xac, 0xb8, 0x89, 0xf9, 0xe5, 0x3c, 0x3b, 0x8c, 0x02, 0x06, 0x9e,
    0xe6, 0x61, 0x1b, 0x19, 0xfd, 0x47, 0x7b, 0x6b, 0x6e, 0x86, 0x40, 0xb9, 0x64, 0x05, 0x3d, 0xdc,
    0xcf, 0x4e, 0xee, 0x72, 0xed, 0xc3, 0x2b, 0xcd, 0x7a, 0x10, 0x50, 0xcb, 0x90, 0xc6, 0xcc, 0x4a,
    0x80, 0x84, 0x60, 0x31, 0x55, 0x8d, 0x74, 0xa1, 0x5f, 0x1e, 0x03, 0x48, 0xf2, 0x9c, 0x0a, 0xb5,
    0xc2, 0x6c, 0x15, 0xbe, 0x56, 0xbb, 0xa5, 0xad, 0x62, 0x99, 0x7e, 0x1c, 0xf5, 0x07, 0xd1, 0x35,
];

pub const CRYPT_TAB1: [u8; 256] = [
    0x7b, 0xa5, 0xdb, 0x80, 0xc2, 0xbe, 0x1c, 0xa6, 0xb1, 0x8f, 0x2f, 0x7a, 0xd0, 0x9a, 0x73, 0x44,
    0x57, 0x69, 0x3d, 0x0b, 0xff, 0xe6, 0x98, 0xf3, 0x31, 0x38, 0x41, 0xcf, 0xf9, 0xe3, 0x9b, 0x61,
    0x33, 0x15, 0x29, 0xf2, 0x19, 0x91, 0xbf, 0x5c, 0x06, 0x74, 0x75, 0x0c, 0x3e, 0x42, 0xcc, 0xad,
    0x03, 0x0e, 0xb9, 0x3a, 0x9d, 0x72, 0xd2, 0x16, 0x9c, 0x50, 0xf4, 0xa1, 0x24, 0x78, 0xa9, 0xb2,
    0x1a, 0x25, 0x64, 0xae, 0x66, 0x82, 0x1b, 0x47, 0xe0, 0xe1, 0x45, 0xf5, 0xa2, 0xc5, 0x83, 0x3b,
    0x4a, 0x79, 0x93, 0xec, 0x36, 0x88, 0xeb, 0x22, 0xf8, 0xd1, 0x5d, 0x00, 0xcd, 0x7e, 0xa3, 0xbc,
    0x54, 0x14, 0x6e, 0x58, 0x7c, 0xbd, 0x3f, 0xde, 0x3c, 0x90, 0xd6, 0x70, 0x8b, 0xc8, 0x20, 0x34,
    0xbb, 0x5a, 0x52, 0x2d, 0xb5, 0x8a, 0x94, 0x23, 0x71, 0x6f, 0xca, 0x4f, 0x30, 0x13, 0x0a, 0x86,
    0xdf, 0x60, 0xc0, 0x7d, 0xf7, 0xea, 0x4d, 0x96, 0x81, 0xb0, 0x77, 0x95, 0x27, 0x09, 0x76, 0xaf,
    0xc6, 0xe7, 0x6b, 0x2c, 0xb8, 0x67, 0x6a, 0x59, 0x28, 0xe4, 0xd9, 0xd4, 0x08, 0x8e, 0xc1, 0xa0,
    0x84, 0x9f, 0x85, 0x53, 0x18, 0xcb, 0x55, 0x5e, 0xe8, 0xda, 0xdd, 0xe5, 0xef, 0x4b, 0x2e, 0x5f,
    0x99, 0x0d, 0xce, 0x92, 0xe2, 0x6d, 0x17, 0xd3, 0x46, 0xfe, 0xf6, 0xfb, 0x40, 0x65, 0x51, 0xb4,
    0x2b, 0x02, 0x2a, 0xee, 0x87, 0x1f, 0x10, 0xd7, 0x4c, 0x68, 0x4e, 0x97, 0x49, 0xaa, 0xdc, 0xb7,
    0x21, 0xf1, 0x1d, 0x39, 0xfc, 0x9e, 0xa4, 0xfa, 0x8c, 0x48, 0x04, 0xa7, 0x07, 0x8d, 0xc7, 0x5b,
    0xb6, 0xe9, 0x62, 0xfd, 0x26, 0xd8, 0xba, 0x35, 0xc3, 0x6c, 0x37, 0x11, 0x01, 0xf0, 0x63, 0x43,
    0x7f, 0xa8, 0xab, 0x1e, 0xb3, 0xc4, 0xc9, 0xd5, 0xac, 0x12, 0x0f, 0xed, 0x05, 0x89, 0x32, 0x56,
];

pub const CRYPT_TAB2: [u8; 256] = [
    0xb5, 0x10, 0xbd, 0xf4, 0xfe, 0x89, 0xb7, 0x7d, 0x9b, 0x9d, 0x5c, 0x9c, 0x9f, 0x78, 0x63, 0xce,
    0xfa, 0x6a, 0x27, 0xc3, 0x2f, 0x92, 0xee, 0x4c, 0xd1, 0x41, 0x6f, 0x6d, 0x70, 0xb8, 0x81, 0x15,
    0xbe, 0x72, 0xa3, 0x54, 0xe5, 0xa1, 0xc5, 0x64, 0xd7, 0xa8, 0xbc, 0xc4, 0x60, 0xc1, 0xe2, 0x5b,
    0x23, 0x24, 0x47, 0x9a, 0xa5, 0x8e, 0x6e, 0xb2, 0xeb, 0xdd, 0xec, 0x2d, 0x3e, 0x53, 0x98, 0xbf,
    0x87, 0x80, 0x05, 0xd3, 0x0f, 0xa6, 0x1e, 0xab, 0x0c, 0x90, 0x2a, 0xe8, 0x77, 0x67, 0x3f, 0x1f,
    0xb4, 0x32, 0x2c, 0x1d, 0xcf, 0x3c, 0x61, 0x52, 0x69, 0x73, 0x2e, 0x5f, 0x5d, 0xc0, 0x2b, 0x84,
    0x16, 0x4b, 0x83, 0xe6, 0xde, 0x62, 0xb0, 0x14, 0xb6, 0x36, 0xd0, 0xd4, 0xc9, 0xf2, 0xca, 0x74,
    0x31, 0x91, 0x38, 0x8f, 0xa9, 0xda, 0x1a, 0xea, 0x29, 0x22, 0xb1, 0x8c, 0xe0, 0x4e, 0x7c, 0x04,
    0x59, 0x21, 0x5a, 0x96, 0x95, 0x26, 0x39, 0x50, 0x1b, 0x51, 0x7a, 0x93, 0xbb, 0x48, 0x94, 0x49,
    0x79, 0x8d, 0x86, 0xad, 0x4d, 0xac, 0x5e, 0x56, 0xdf, 0xf8, 0x65, 0xc8, 0xae, 0x55, 0xcc, 0x82,
    0xc6, 0x11, 0xf7, 0xe3, 0xfd, 0x34, 0x97, 0x4a, 0xf3, 0xed, 0xcb, 0x4f, 0x35, 0xaf, 0xd6, 0x28,
    0xa7, 0x20, 0x17, 0xb3, 0x03, 0xfc, 0x76, 0xd2, 0x08, 0xa2, 0x42, 0x7f, 0x8b, 0x66, 0xaa, 0x0e,
    0x07, 0x13, 0xa4, 0x25, 0x06, 0xe4, 0x01, 0xf0, 0xd5, 0xcd, 0x0d, 0x3b, 0x9e, 0xf9, 0xa0, 0x46,
    0x02, 0x75, 0x45, 0xff, 0x99, 0xb9, 0x7e, 0xdc, 0x19, 0x7b, 0xe7, 0x88, 0x3a, 0x85, 0xf6, 0xf1,
    0xe9, 0x68, 0x37, 0xfb, 0x1c, 0xf5, 0x00, 0x57, 0xba, 0xe1, 0x30, 0x0a, 0x18, 0xd9, 0x58, 0x12,
    0xdb, 0xc7, 0x71, 0x09, 0x43, 0xc2, 0x44, 0xef, 0x6c, 0x33, 0x0b, 0xd8, 0x40, 0x6b, 0x8a, 0x3d,
];

pub const CRYPT_TAB3: [u8; 256] = [
    0xca, 0xad, 0x09, 0x7a, 0x12, 0xc1, 0x95, 0xd8, 0x08, 0x82, 0xd0, 0x48, 0x07, 0x65, 0x1e, 0xfd,
    0x74, 0x3b, 0xbc, 0xd5, 0x43, 0xcf, 0xc8, 0xbb, 0x26, 0x09, 0x39, 0x01, 0x61, 0x72, 0x30, 0xa6,
    0xc4, 0xa7, 0x38, 0xc5, 0xc5, 0x92, 0x30, 0xba, 0xc0, 0xd8, 0x3e, 0x5c, 0x23, 0x35, 0xf7, 0x92,
    0x73, 0x4b, 0x8a, 0x2b, 0xbd, 0x47, 0xb6, 0x10, 0x97, 0x48, 0x6b, 0xcb, 0x11, 0x5c, 0xb1, 0x4b,
    0x3f, 0xa1, 0x61, 0x85, 0x82, 0xa8, 0x3e, 0xaf, 0x21, 0x8c, 0x6a, 0xda, 0x04, 0xe2, 0xc8, 0x85,
    0x83, 0x2f, 0x60, 0xb7, 0x88, 0xd5, 0x94, 0xfb, 0xe7, 0xa8, 0xe9, 0x26, 0x76, 0x9e, 0xa4, 0x1d,
    0x07, 0xaf, 0x42, 0x57, 0x2c, 0x9e, 0xbe, 0x2d, 0x6e, 0xdd, 0x91, 0x1c, 0x21, 0x5c, 0x23, 0xf6,
    0x95, 0xe1, 0x45, 0xf6, 0xce, 0x96, 0x43, 0xd1, 0x0b, 0x09, 0x84, 0xf8, 0x43, 0x0c, 0x43, 0x3b,
    0xbd, 0x94, 0x59, 0xf4, 0xd2, 0x79, 0xd2, 0xe9, 0x3e, 0x77, 0xe9, 0x7c, 0xef, 0x84, 0x70, 0x83,
    0x57, 0x5b, 0xa4, 0x4b, 0xef, 0x67, 0xd9, 0x32, 0xfe, 0xa0, 0xfc, 0xfb, 0x03, 0x50, 0xff, 0x5a,
    0x42, 0x7f, 0xc9, 0xe1, 0x61, 0x72, 0x83, 0x0b, 0x83, 0x5e, 0x30, 0x16, 0x32, 0x1a, 0x51, 0xa3,
    0xd5, 0x95, 0x77, 0xe1, 0x72, 0xf6, 0xa0, 0x7d, 0x0a, 0x13, 0xd1, 0xc3, 0xa9, 0x1d, 0x21, 0x66,
    0x97, 0x51, 0xcb, 0x8e, 0xdb, 0x4e, 0xf8, 0xe9, 0x10, 0x45, 0xb9, 0x16, 0xd2, 0x30, 0x7c, 0x7c,
    0xa1, 0x07, 0xf4, 0x1b, 0x7f, 0x51, 0x8d, 0xcf, 0x8b, 0x1f, 0x8d, 0x46, 0xaa, 0xdf, 0xe2, 0x98,
    0x47, 0x5c, 0x9f, 0x08, 0x08, 0x2a, 0x38, 0x43, 0x9a, 0x77, 0xfc, 0x7e, 0x35, 0x1a, 0x14, 0x3d,
    0x75, 0xad, 0xb9, 0x79, 0xd0, 0xf9, 0x44, 0x77, 0x32, 0xb6, 0x95, 0xe6, 0x8e, 0xef, 0x09, 0x0c,
];

/// Challenge byte permutation, one row per key type.
pub const CHALLENGE_PERM: [[usize; 10]; 3] = [
    [1, 3, 0, 7, 5, 2, 9, 6, 4, 8],
    [6, 1, 9, 3, 8, 5, 7, 4, 0, 2],
    [4, 0, 3, 5, 7, 2, 8, 6, 1, 9],
];

/// Variant index remapping for the two bus-key key types.
pub const VARIANT_PERM: [[u8; 32]; 2] = [
    [
        0x0a, 0x08, 0x0e, 0x0c, 0x0b, 0x09, 0x0f, 0x0d,
        0x1a, 0x18, 0x1e, 0x1c, 0x1b, 0x19, 0x1f, 0x1d,
        0x02, 0x00, 0x06, 0x04, 0x03, 0x01, 0x07, 0x05,
        0x12, 0x10, 0x16, 0x14, 0x13, 0x11, 0x17, 0x15,
    ],
    [
        0x12, 0x1a, 0x16, 0x1e, 0x02, 0x0a, 0x06, 0x0e,
        0x10, 0x18, 0x14, 0x1c, 0x00, 0x08, 0x04, 0x0c,
        0x13, 0x1b, 0x17, 0x1f, 0x03, 0x0b, 0x07, 0x0f,
        0x11, 0x19, 0x15, 0x1d, 0x01, 0x09, 0x05, 0x0d,
    ],
];

/// Per-variant tweak bytes mixed into every substitution round.
pub const VARIANTS: [u8; 32] = [
    0xb7, 0x74, 0x85, 0xd0, 0xcc, 0xdb, 0xca, 0x73,
    0x03, 0xfe, 0x31, 0x03, 0x52, 0xe0, 0xb7, 0x42,
    0x63, 0x16, 0xf2, 0x2a, 0x79, 0x52, 0xff, 0x1b,
    0x7a, 0x11, 0xca, 0x1a, 0x9b, 0x40, 0xad, 0x01,
];

/// The 5-byte authentication secret mixed into the keystream seed.
pub const SECRET: [u8; 5] = [0x55, 0xd6, 0xc4, 0xc5, 0x28];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab3_repeats_every_eight_entries() {
        let pattern = [0x00, 0x24, 0x49, 0x6d, 0x92, 0xb6, 0xdb, 0xff];
        for (i, &value) in CSS_TAB3.iter().enumerate() {
            assert_eq!(value, pattern[i % 8], "index {i}");
        }
    }

    #[test]
    fn tab4_is_bit_reversal() {
        fn bit_reverse(byte: u8) -> u8 {
            (0..8).fold(0, |acc, i| acc | (((byte >> i) & 1) << (7 - i)))
        }
        for byte in 0..=255u8 {
            assert_eq!(CSS_TAB4[byte as usize], bit_reverse(byte));
        }
        assert_eq!(CSS_TAB4[0x01], 0x80);
    }

    #[test]
    fn tab5_is_complemented_bit_reversal() {
        for byte in 0..256 {
            assert_eq!(CSS_TAB5[byte], CSS_TAB4[byte] ^ 0xff);
        }
    }

    #[test]
    fn substitution_tables_are_permutations() {
        for table in [&CSS_TAB1, &CSS_TAB2, &CSS_TAB4, &CSS_TAB5] {
            let mut seen = [false; 256];
            for &value in table.iter() {
                seen[value as usize] = true;
            }
            assert!(seen.iter().all(|&hit| hit));
        }
    }

    #[test]
    fn permutation_rows_are_complete() {
        for row in &CHALLENGE_PERM {
            let mut seen = [false; 10];
            for &index in row {
                seen[index] = true;
            }
            assert!(seen.iter().all(|&hit| hit));
        }
        for row in &VARIANT_PERM {
            let mut seen = [false; 32];
            for &index in row {
                seen[index as usize] = true;
            }
            assert!(seen.iter().all(|&hit| hit));
        }
    }
}
