//! Seaside Suites demo driver.
//!
//! Walks one complete booking through the wizard — dates, rooms, guest
//! details, loyalty, coupon, payment — then asks the concierge chat a
//! question, all against the simulated latencies from configuration.

use chrono::{Days, Utc};
use seaside_booking::pricing::{Quote, usd};
use seaside_booking::{BookingAction, Catalog, RoomId};
use seaside_chat::{ChatAction, HANDOFF_MESSAGE, whatsapp_link};
use seaside_site::{Config, Site};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Seaside Suites demo starting");

    let site = Site::new(&config);
    book_a_stay(&site).await?;
    ask_the_concierge(&site, &config).await?;

    site.shutdown(Duration::from_secs(10)).await?;
    info!("Seaside Suites demo finished");
    Ok(())
}

/// Drives the five wizard steps for a two-night garden suite stay.
async fn book_a_stay(site: &Site) -> Result<(), Box<dyn std::error::Error>> {
    let booking = site.booking();
    let timeout = Duration::from_secs(30);

    // The guest clicks Book Now on the Garden Suite card
    site.open_booking(Some(RoomId::new("suite"))).await?;

    // Step 1: two nights next month for the default couple
    let check_in = Utc::now().date_naive() + Days::new(30);
    let check_out = check_in + Days::new(2);
    booking.send(BookingAction::SetCheckIn(check_in)).await?;
    booking.send(BookingAction::SetCheckOut(check_out)).await?;

    info!(%check_in, %check_out, "checking availability");
    let mut checked = booking.send(BookingAction::CheckAvailability).await?;
    checked
        .wait_with_timeout(timeout)
        .await
        .map_err(|()| "availability check never completed")?;

    let offered = booking.state(|s| s.available_rooms.clone()).await;
    info!(rooms = offered.len(), "rooms on offer");

    // Step 2: the preselected suite is already in the draft
    booking.send(BookingAction::ContinueToGuestInfo).await?;

    // Step 3: contact details, two add-ons, join the rewards program
    booking
        .send(BookingAction::SetFirstName("Ada".to_string()))
        .await?;
    booking
        .send(BookingAction::SetLastName("Lovelace".to_string()))
        .await?;
    booking
        .send(BookingAction::SetEmail("ada@example.com".to_string()))
        .await?;
    booking
        .send(BookingAction::SetPhone("+1 (555) 000-1111".to_string()))
        .await?;
    booking.send(BookingAction::SetEarlyCheckIn(true)).await?;
    booking.send(BookingAction::SetAirportTransfer(true)).await?;
    booking.send(BookingAction::JoinLoyalty).await?;
    booking.send(BookingAction::ContinueToPayment).await?;

    // Step 4: a coupon on top of the member discount
    booking
        .send(BookingAction::SetCouponCode("stay20".to_string()))
        .await?;
    booking.send(BookingAction::ApplyCoupon).await?;

    let catalog = Catalog::seaside();
    let quote = booking
        .state(|s| Quote::for_draft(&s.draft, &catalog))
        .await;
    info!(
        nights = quote.nights,
        rooms = %usd(quote.room_subtotal),
        add_ons = %usd(quote.add_on_total),
        loyalty = %usd(quote.loyalty_discount),
        coupon = %usd(quote.coupon_discount),
        total = %usd(quote.total()),
        "quote ready"
    );

    let mut settled = booking.send(BookingAction::SubmitPayment).await?;
    settled
        .wait_with_timeout(timeout)
        .await
        .map_err(|()| "payment never settled")?;

    let confirmation = booking
        .state(|s| s.confirmation.as_ref().map(ToString::to_string))
        .await
        .ok_or("no confirmation code assigned")?;
    info!(%confirmation, total = %usd(quote.total()), "booking confirmed");

    site.close_booking().await?;
    Ok(())
}

/// Opens the chat, asks about amenities, and prints the WhatsApp handoff.
async fn ask_the_concierge(
    site: &Site,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let chat = site.chat();

    chat.send(ChatAction::ToggleChat).await?;
    chat.send(ChatAction::SetInput(
        "Do you have a pool and parking?".to_string(),
    ))
    .await?;

    let mut replied = chat.send(ChatAction::SendMessage).await?;
    replied
        .wait_with_timeout(Duration::from_secs(30))
        .await
        .map_err(|()| "the concierge never replied")?;

    if let Some(reply) = chat.state(|s| s.last_message().map(|m| m.body.clone())).await {
        info!(%reply, "concierge replied");
    }

    let handoff = whatsapp_link(&config.chat.whatsapp_phone, HANDOFF_MESSAGE);
    info!(%handoff, "handoff link ready");
    Ok(())
}
