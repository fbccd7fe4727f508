// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! End-to-end: detect, deserialize and re-serialize real transaction payloads.

use catbuffer::{decode_exact, Codec, Cursor, DecodeError, DetectError, Discriminant};
use catbuffer_schema::{
    registry, AggregateBondedTransaction, TransferTransaction, TransactionType,
    TRANSACTION_GROUP,
};

const TRANSFER_HEX: &str = concat!(
    "D20000000000000010BB56B8B5E689C55013040F8536DBB2E87F53486D323B88BB3CE149BC427001676CCA0BFBB1B072",
    "62CAB6EF4822CE212CAEC29F3DD03D0C43B8BABA94079ABB6AD915322BF8703737B10D587E5DD272D82FABC124F465D7",
    "D685650ADEB2DB390000000001985441204E0000000000000068C461080000000E3990756D69C8324CCE7F3C0E2F4775",
    "142EDE4B0F951AB01200020000000000CE8BA0672E21C07240420F0000000000F82302A23F91ED6B1900000000000000",
    "0048656C6C6F2C2063617462756666657221",
);

const KEY_LINK_HEX: &str = concat!(
    "A100000000000000E185A09E6C40BEBEA43D3B7E3EC44C0BF62BE7CEDCE626EAC9C67415D767A55C38179274DD0255A1",
    "933DB29D3970B9B339C885DCD752BE735ECFBC1152CD484DCBBB8B93F419A67CDA25A8DFDC6FF829DD3F2202EB5844E9",
    "4E07CEEB6E654EED0000000001684C4164000000000000000700000000000000AD8C714CDD75ED866895C971443E2833",
    "F7EEEB54BB0DC3AB2FEA1F55FBE00EA001",
);

const AGGREGATE_BONDED_HEX: &str = concat!(
    "300200000000000049213EEE20DB2CAC3E3AF70B2A97D13D118C63ED62A4DA78624D358AF667EDF4A8BE04DF8AA355C8",
    "C4D8C3F890580179FFA0AC93ACDE3431F750EEDE8C186B78F0B24497AA6EF5E4597F1660B85D65F25994F5537A7C78E2",
    "401987A6D771DC420000000002984142F4010000000000006300000000000000E21CFEAB9D196DA2D1D27CAA6C73E178",
    "748CA7D1ED1E7F3B13CFB6D2BD3D4420B80000000000000060000000000000007F43BFDC7E228A83CE8FA4A749F4E171",
    "2DB363F16D23EB770FF74DEBF90F65630000000001985441711CA9C77868A7373C58D6CD06514FFC7006B84E4A300B6A",
    "0000010000000000CE8BA0672E21C0720500000000000000510000000000000049FA30987738506ED2B29AE328A62298",
    "1D79B57246B65847AECB0A7D55DA40200000000001984C4137744EE1AF9A70882E269637C113DB9B33B50B546932E56F",
    "1D5E47C050B32DA8000000000000000000000000000000001F347B07DCC598336BDFA707914F2B2363B4A15A50125CDD",
    "D1DFE66B73510B453F4B8BD338E83FA39F2BDA7CDBDB1F2D04577BE393F3C2D57DCFABF18EDC863412568FB1E71F3BD0",
    "8AB7B90B1D1429A2927CE21FD33AF23BA050FAE973F9F85F0000000000000000A0D01A692142360945D114C6B0BD38D6",
    "B4884D00E0B2054A871239DC075655C94D4A89D4C20C15BAA1A797B69BD94034BDE237D58E57F622995714AEAD665650",
    "E344A4BE8BDF4202E98193124EB13E83C00E188D84DE87D582579A12929C7A9E",
);

fn bytes(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).expect("test vector is valid hex")
}

/// Decode through the group, then re-encode; returns the resolved type name.
fn detect_decode_encode(hex_str: &str) -> &'static str {
    let input = bytes(hex_str);
    let mut cursor = Cursor::new(&input);
    let codec = registry()
        .decode(TRANSACTION_GROUP, &mut cursor)
        .expect("payload decodes");
    assert!(cursor.is_empty(), "{} left {} bytes", codec.type_name(), cursor.remaining());
    assert_eq!(codec.size(), input.len());

    let output = codec.to_bytes().expect("payload re-encodes");
    assert_eq!(hex::encode_upper(output), hex_str);
    codec.type_name()
}

#[test]
fn transfer_round_trips() {
    assert_eq!(detect_decode_encode(TRANSFER_HEX), "TransferTransaction");
}

#[test]
fn key_link_round_trips() {
    assert_eq!(detect_decode_encode(KEY_LINK_HEX), "AccountKeyLinkTransaction");
}

#[test]
fn aggregate_bonded_round_trips() {
    assert_eq!(
        detect_decode_encode(AGGREGATE_BONDED_HEX),
        "AggregateBondedTransaction"
    );
}

#[test]
fn transfer_fields_decode() {
    let tx: TransferTransaction = decode_exact(&bytes(TRANSFER_HEX)).expect("decode");
    assert_eq!(tx.header.size, 210);
    assert_eq!(tx.size(), 210);
    assert_eq!(tx.header.transaction_type, TransactionType::TRANSFER);
    assert_eq!(tx.header.fee, 20_000);
    assert_eq!(tx.body.mosaics.len(), 2);
    assert_eq!(tx.body.mosaics[0].amount, 1_000_000);
    assert_eq!(tx.body.message, b"\0Hello, catbuffer!");
}

#[test]
fn aggregate_embedded_dispatch() {
    let tx: AggregateBondedTransaction =
        decode_exact(&bytes(AGGREGATE_BONDED_HEX)).expect("decode");
    assert_eq!(tx.body.payload_size(), 184);
    let names: Vec<&str> = tx.body.transactions.iter().map(|t| t.type_name()).collect();
    assert_eq!(
        names,
        ["EmbeddedTransferTransaction", "EmbeddedAccountKeyLinkTransaction"]
    );
    assert_eq!(tx.body.cosignatures.len(), 2);
}

#[test]
fn detect_positions_body_past_header() {
    let input = bytes(TRANSFER_HEX);
    let cursor = Cursor::new(&input);
    let detection = registry()
        .detect(TRANSACTION_GROUP, &cursor)
        .expect("detect");
    assert_eq!(detection.discriminant, Discriminant::new(0x4154, 1));
    assert_eq!(detection.codec.type_name(), "TransferTransaction");
    assert_eq!(detection.body.offset(), 128);
    assert_eq!(cursor.offset(), 0);
}

#[test]
fn detect_rejects_unregistered_version() {
    let mut input = bytes(TRANSFER_HEX);
    input[108] = 99;
    let err = registry()
        .detect(TRANSACTION_GROUP, &Cursor::new(&input))
        .unwrap_err();
    assert_eq!(
        err,
        DetectError::Unresolved {
            group: "Transaction",
            discriminant: Discriminant::new(0x4154, 99),
        }
    );
}

#[test]
fn every_transfer_prefix_is_rejected() {
    let input = bytes(TRANSFER_HEX);
    for cut in 0..input.len() {
        let mut cursor = Cursor::new(&input[..cut]);
        let err = registry()
            .decode(TRANSACTION_GROUP, &mut cursor)
            .unwrap_err();
        match err {
            DecodeError::Detect(DetectError::Header { source, .. })
            | DecodeError::Codec { source, .. } => assert!(source.is_bounds(), "cut {cut}: {source}"),
            other => panic!("cut {cut}: unexpected {other}"),
        }
    }
}

#[test]
fn unknown_name_is_absent() {
    assert!(registry().create("NotARealType").is_none());
}

#[test]
fn pretty_print_after_decode() {
    let input = bytes(KEY_LINK_HEX);
    let codec = registry()
        .decode(TRANSACTION_GROUP, &mut Cursor::new(&input))
        .expect("decode");
    let out = codec.pretty();
    assert!(out.starts_with("AccountKeyLinkTransaction (161 bytes)\n{\n\tTransaction (128 bytes)\n"));
    assert!(out.contains("\t\tLinkAction link_action: 1 (LINK) (1 bytes)\n"));
}
