use anchor_lang::AnchorSerialize;
use solana_program::pubkey::Pubkey;
use streamview::addresses::{stream_address, stream_list_address, stream_token_address};
use streamview::constants::NATIVE_STREAM_SENTINEL;
use streamview::utils::{format_timestamp, ui_amount_string};
use streamview::{
    ActionAuthority, ClusterConfig, CommitmentLevel, StreamAccount, StreamEntry, StreamList,
    StreamRole, StreamStatus, StreamView,
};

#[test]
fn stream_account_decodes_from_account_data() {
    let stream = test_stream();
    let mut data = StreamAccount::DISCRIMINATOR.to_vec();
    data.extend(stream.try_to_vec().unwrap());
    // accounts are allocated with fixed space; padding is expected
    data.extend([0_u8; 64].iter());

    let decoded = StreamAccount::try_from_account_data(&data).unwrap();
    assert_eq!(decoded, stream, "incorrect decoded stream");
}

#[test]
fn stream_account_rejects_foreign_discriminator() {
    let stream = test_stream();
    let mut data = StreamList::DISCRIMINATOR.to_vec();
    data.extend(stream.try_to_vec().unwrap());

    assert!(
        StreamAccount::try_from_account_data(&data).is_err(),
        "expected error"
    );
}

#[test]
fn stream_account_rejects_short_and_garbled_data() {
    assert!(
        StreamAccount::try_from_account_data(&[1, 2, 3, 4]).is_err(),
        "expected error"
    );

    // correct discriminator, undecodable payload
    let mut data = StreamAccount::DISCRIMINATOR.to_vec();
    data.extend([7, 0, 0, 0].iter());
    assert!(
        StreamAccount::try_from_account_data(&data).is_err(),
        "expected error"
    );
}

#[test]
fn stream_list_decodes_and_counts() {
    let list = StreamList {
        last_stream_id: 3,
        items: vec![
            StreamEntry { stream: Pubkey::new_unique(), is_sender: true },
            StreamEntry { stream: Pubkey::new_unique(), is_sender: false },
        ],
    };
    let mut data = StreamList::DISCRIMINATOR.to_vec();
    data.extend(list.try_to_vec().unwrap());

    let decoded = StreamList::try_from_account_data(&data).unwrap();
    assert_eq!(decoded, list, "incorrect decoded list");
    assert_eq!(decoded.next_stream_id().unwrap(), 4, "incorrect next id");
    assert_eq!(decoded.items[0].role(), StreamRole::Creator, "incorrect role");
    assert_eq!(decoded.items[1].role(), StreamRole::Receiver, "incorrect role");
}

#[test]
fn native_streams_have_no_mint() {
    let mut stream = test_stream();
    assert_eq!(stream.mint(), None, "blank sentinel expected to map to None");

    let mint = Pubkey::new_unique();
    stream.token_mint = mint;
    assert_eq!(stream.mint(), Some(mint), "incorrect mint");
}

#[test]
fn view_row_mid_stream() {
    let stream = test_stream();
    let address = Pubkey::new_unique();

    let view = StreamView::derive(address, &stream, StreamRole::Creator, 1250, 6).unwrap();
    assert_eq!(view.address, address, "incorrect address");
    assert_eq!(view.ready_for_withdrawal, 100, "incorrect withdrawable amount");
    assert_eq!(view.status, StreamStatus::Active, "incorrect status");
    assert_eq!(view.interval, "Per Minute", "incorrect interval label");
    assert_eq!(view.remaining_balance, 1_500_000, "incorrect balance");
    assert_eq!(view.remaining_balance_display, "1.50", "incorrect balance display");
    assert_eq!(view.role, StreamRole::Creator, "incorrect role");
    assert_eq!(view.mint, None, "incorrect mint");
    assert_eq!(view.starts_at, "1/1/1970 0:16:40", "incorrect start date");
    assert_eq!(view.cancel_by, ActionAuthority::Both, "incorrect authority");
}

#[test]
fn view_falls_back_to_raw_seconds_for_unlabeled_intervals() {
    let mut stream = test_stream();
    stream.interval = 90;

    let view =
        StreamView::derive(Pubkey::new_unique(), &stream, StreamRole::Receiver, 1250, 6).unwrap();
    assert_eq!(view.interval, "90", "incorrect interval fallback");
}

#[test]
fn timestamp_formatting() {
    assert_eq!(format_timestamp(0), "1/1/1970 0:0:0");
    assert_eq!(format_timestamp(1_700_000_000), "14/11/2023 22:13:20");
}

#[test]
fn ui_amount_formatting() {
    assert_eq!(ui_amount_string(1_500_000, 6), "1.50");
    assert_eq!(
        ui_amount_string(2_340_000_000, spl_token::native_mint::DECIMALS),
        "2.34"
    );
    assert_eq!(ui_amount_string(0, 9), "0.00");
}

#[test]
fn address_derivations_are_deterministic() {
    let program_id = Pubkey::new_unique();
    let sender = Pubkey::new_unique();
    let mint = Pubkey::new_unique();

    let (stream, bump) = stream_address(&program_id, "1", &sender);
    let (stream_again, bump_again) = stream_address(&program_id, "1", &sender);
    assert_eq!(stream, stream_again, "derivation not deterministic");
    assert_eq!(bump, bump_again, "bump not deterministic");

    let (other, _) = stream_address(&program_id, "2", &sender);
    assert_ne!(stream, other, "distinct ids expected to derive distinct addresses");

    let (list, _) = stream_list_address(&program_id, &sender);
    let (list_again, _) = stream_list_address(&program_id, &sender);
    assert_eq!(list, list_again, "derivation not deterministic");
    assert_ne!(list, stream, "registry expected to differ from stream address");

    let escrow = stream_token_address(&stream, &mint);
    assert_eq!(
        escrow,
        stream_token_address(&stream, &mint),
        "derivation not deterministic"
    );
}

#[test]
fn authority_permissions() {
    assert!(ActionAuthority::Both.permits(StreamRole::Creator));
    assert!(ActionAuthority::Both.permits(StreamRole::Receiver));
    assert!(ActionAuthority::Sender.permits(StreamRole::Creator));
    assert!(!ActionAuthority::Sender.permits(StreamRole::Receiver));
    assert!(ActionAuthority::Recipient.permits(StreamRole::Receiver));
    assert!(!ActionAuthority::Recipient.permits(StreamRole::Creator));
    assert!(!ActionAuthority::Neither.permits(StreamRole::Creator));
    assert!(!ActionAuthority::Neither.permits(StreamRole::Receiver));
}

#[test]
fn cluster_config() {
    let program_id = Pubkey::new_unique();

    let config = ClusterConfig::devnet(program_id);
    assert_eq!(config.url, "https://api.devnet.solana.com", "incorrect url");
    assert_eq!(config.commitment, CommitmentLevel::Processed, "incorrect default");
    assert_eq!(config.program_id, program_id, "incorrect program id");

    let config = config.with_commitment(CommitmentLevel::Finalized);
    assert_eq!(config.commitment.as_str(), "finalized", "incorrect commitment");
}

fn test_stream() -> StreamAccount {
    StreamAccount {
        stream_id: "1".to_string(),
        title: "payroll".to_string(),
        recipient: Pubkey::new_unique(),
        sender: Pubkey::new_unique(),
        token_mint: NATIVE_STREAM_SENTINEL,
        created_at: 900,
        start_time: 1000,
        stop_time: 2000,
        remaining_balance: 1_500_000,
        deposit: 1_500_000,
        withdrawn: 0,
        cliff_amount: 0,
        interval: 60,
        rate: 25,
        time_left: 0,
        paused_amount: 0,
        bump: 254,
        cancel_by: ActionAuthority::Both,
        pause_by: ActionAuthority::Sender,
        resume_by: ActionAuthority::Sender,
        withdraw_by: ActionAuthority::Recipient,
        edit_by: ActionAuthority::Both,
        is_cliff_percent: false,
        is_paused: false,
        is_cancelled: false,
        is_infinite: false,
    }
}
