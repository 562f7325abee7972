//! End-to-end scenarios across membership, the content gate and the editor.

use std::sync::Arc;

use nexora::adapters::{InMemoryKeyValueStore, MockBillingProvider, MockPlatformApi};
use nexora::application::{
    open_post, ConfirmCheckoutCommand, ConfirmCheckoutHandler, InFlightActions, MembershipState,
    PublishDocumentHandler, StartCheckoutHandler,
};
use nexora::domain::content::{GatedContent, Post, PostStatus, UpgradePrompt};
use nexora::domain::editor::{BlockKind, BlockUpdate, Document};
use nexora::domain::foundation::{Money, PostId, Timestamp, UserId};
use nexora::domain::membership::{CheckoutSessionId, MembershipTier};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn premium_post(content: &str) -> Post {
    let now = Timestamp::now();
    Post {
        id: PostId::new("premium-1").unwrap(),
        title: "Inside the archive".to_string(),
        content: content.to_string(),
        author: UserId::new("creator-1").unwrap(),
        attachments: Vec::new(),
        is_premium: true,
        price: Some(Money::from_cents(500)),
        status: PostStatus::Published,
        created_at: now,
        updated_at: now,
        likes: 0,
        views: 0,
        comments: 0,
    }
}

async fn free_membership() -> (Arc<MembershipState>, InMemoryKeyValueStore) {
    let store = InMemoryKeyValueStore::new();
    let state = MembershipState::load(Arc::new(store.clone())).await.unwrap();
    (Arc::new(state), store)
}

// =============================================================================
// Content gate
// =============================================================================

#[tokio::test]
async fn free_reader_sees_half_then_full_after_upgrade() {
    let (membership, _) = free_membership().await;
    let post = premium_post(&"x".repeat(200));

    let before = open_post(&post, &membership);
    match &before.body {
        GatedContent::Preview {
            preview,
            upgrade_prompt,
        } => {
            assert_eq!(preview.chars().count(), 100);
            assert_eq!(*upgrade_prompt, UpgradePrompt::PREMIUM_STORY);
        }
        other => panic!("expected preview, got {:?}", other),
    }

    membership.upgrade_to_member().await.unwrap();

    let after = open_post(&post, &membership);
    assert_eq!(after.body.visible_text().chars().count(), 200);
    assert!(!after.body.is_truncated());
}

#[tokio::test]
async fn confirmed_checkout_unlocks_premium_post_and_survives_reload() {
    let (membership, store) = free_membership().await;
    let billing = Arc::new(MockBillingProvider::new());
    billing.confirm_session("cs_1", MembershipTier::Member);
    let post = premium_post(&"y".repeat(200));

    let redirect = StartCheckoutHandler::new(billing.clone(), membership.clone())
        .handle()
        .await
        .unwrap();
    assert!(!redirect.as_str().is_empty());
    assert!(open_post(&post, &membership).body.is_truncated());

    let tier = ConfirmCheckoutHandler::new(billing, membership.clone())
        .handle(ConfirmCheckoutCommand {
            session_id: CheckoutSessionId::new("cs_1").unwrap(),
        })
        .await
        .unwrap();
    assert_eq!(tier, MembershipTier::Member);

    let reloaded = MembershipState::load(Arc::new(store)).await.unwrap();
    assert!(reloaded.is_paid_member());
    assert!(!open_post(&post, &reloaded).body.is_truncated());
}

// =============================================================================
// Editor
// =============================================================================

#[test]
fn blocks_are_ordered_by_insertion_point() {
    let mut doc = Document::new();
    assert_eq!(doc.blocks().len(), 1);
    assert_eq!(doc.blocks()[0].kind, BlockKind::Paragraph);
    assert!(doc.blocks()[0].content.is_empty());
    let paragraph = doc.blocks()[0].id;

    doc.add_block(BlockKind::Heading1, None).unwrap();
    doc.add_block(BlockKind::Divider, Some(&paragraph)).unwrap();

    let kinds: Vec<_> = doc.blocks().iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![BlockKind::Paragraph, BlockKind::Divider, BlockKind::Heading1]
    );
}

#[tokio::test]
async fn written_document_is_published_and_gated_for_free_readers() {
    let api = MockPlatformApi::new();
    let handler = PublishDocumentHandler::new(Arc::new(api.clone()), InFlightActions::new());

    let mut doc = Document::new();
    doc.set_title("Field notes").unwrap();
    let paragraph = doc.blocks()[0].id;
    doc.update_block(&paragraph, BlockUpdate::content("z".repeat(300)))
        .unwrap();
    doc.set_premium(true).unwrap();
    doc.set_price(Some(Money::from_cents(300))).unwrap();

    let published = handler.handle(&mut doc).await.unwrap();

    assert!(doc.is_published());
    assert_eq!(api.posts().len(), 1);
    assert_eq!(published.price, Some(Money::from_cents(300)));

    let (membership, _) = free_membership().await;
    let readable = open_post(&published, &membership);
    assert_eq!(readable.body.visible_text().chars().count(), 150);
}
