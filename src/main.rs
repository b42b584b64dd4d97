//! bathbuzzer - BLE switch notifier for nRF52840.
//!
//! Advertises one custom service and, while a central is connected,
//! publishes the state of a pull-up switch once per second:
//! `1` when the switch is open, `2` when it is closed.

#![no_std]
#![no_main]

mod ble;

use bathbuzzer::{config, App, LinkEdge, LinkStatus, PinLevel, SwitchInput, Tick};
use defmt::{debug, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::interrupt::Priority;
use embassy_time::{Duration, Timer};
use nrf_softdevice::Softdevice;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

static LINK: LinkStatus = LinkStatus::new();
static SERVER: StaticCell<ble::Server> = StaticCell::new();

/// Switch wired to ground with the internal pull-up enabled.
struct SwitchPin(Input<'static>);

impl SwitchInput for SwitchPin {
    fn level(&mut self) -> PinLevel {
        if self.0.is_high() {
            PinLevel::High
        } else {
            PinLevel::Low
        }
    }
}

fn log_tick(tick: &Tick) {
    if let Some(publish) = tick.publish {
        match publish.result {
            Ok(()) => debug!("Notify: {}", publish.code),
            Err(e) => warn!("Notify {} failed: {}", publish.code, e),
        }
    }
    match tick.edge {
        Some(LinkEdge::Connected) => info!("Link: up"),
        Some(LinkEdge::Disconnected) => info!("Link: down, advertising requested"),
        None => {}
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("bathbuzzer starting");

    // SoftDevice reserves interrupt priorities 0, 1 and 4.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.gpiote_interrupt_priority = Priority::P2;
    nrf_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(nrf_config);

    let switch = SwitchPin(Input::new(p.P0_11, Pull::Up));
    info!("Switch on {} (pull-up)", config::SWITCH_PIN_LABEL);

    let sd = Softdevice::enable(&ble::softdevice_config());
    let server: &'static ble::Server = SERVER.init(unwrap!(ble::Server::new(sd)));
    let sd: &'static Softdevice = sd;
    unwrap!(spawner.spawn(ble::softdevice_task(sd)));
    unwrap!(spawner.spawn(ble::link_task(sd, server, &LINK)));
    info!("Waiting for a client connection to notify...");

    let mut app = App::new(&LINK, switch, ble::SoftdeviceTransport::new(server));

    loop {
        let tick = app.tick();
        log_tick(&tick);
        Timer::after(Duration::from_millis(config::LOOP_PERIOD_MS)).await;
    }
}
