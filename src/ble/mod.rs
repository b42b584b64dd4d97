//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Peripheral** role:
//!
//! 1. **Advertiser** - announces the switch service until a central
//!    connects.
//! 2. **GATT server** - serves the switch characteristic for the lifetime
//!    of the connection.
//! 3. **Link bookkeeping** - flips the shared [`LinkStatus`] on connect
//!    and disconnect, and parks the live [`Connection`] where the main
//!    loop's transport can find it.
//!
//! After a disconnect the link task does not advertise on its own: it
//! waits for the main loop to observe the edge and raise [`ADVERTISE`].

pub mod server;
pub mod transport;

use core::cell::RefCell;
use core::mem;

use bathbuzzer::config;
use bathbuzzer::LinkStatus;
use defmt::{info, warn};
use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use nrf_softdevice::ble::advertisement_builder::{
    Flag, LegacyAdvertisementBuilder, LegacyAdvertisementPayload, ServiceList,
};
use nrf_softdevice::ble::{gatt_server, peripheral, Connection};
use nrf_softdevice::{raw, Softdevice};

pub use server::{Server, ServerEvent, SwitchServiceEvent};
pub use transport::SoftdeviceTransport;

/// The live connection, if any. Written by [`link_task`] only.
pub static CONNECTION: Mutex<CriticalSectionRawMutex, RefCell<Option<Connection>>> =
    Mutex::new(RefCell::new(None));

/// Raised by the main loop when it has seen a disconnect edge.
pub static ADVERTISE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Flags + the 128-bit service UUID (21 of 31 bytes).
static ADV_DATA: LegacyAdvertisementPayload = LegacyAdvertisementBuilder::new()
    .flags(&[Flag::GeneralDiscovery, Flag::LE_Only])
    .services_128(ServiceList::Complete, &[config::service_uuid_le_bytes()])
    .build();

/// The name does not fit next to a 128-bit UUID, so it rides in the
/// scan response.
static SCAN_DATA: LegacyAdvertisementPayload = LegacyAdvertisementBuilder::new()
    .full_name(config::DEVICE_NAME)
    .build();

/// SoftDevice configuration for a single-link peripheral.
pub fn softdevice_config() -> nrf_softdevice::Config {
    nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: config::BLE_MAX_CONNECTIONS,
            event_length: 24,
        }),
        conn_gatt: Some(raw::ble_gatt_conn_cfg_t {
            att_mtu: config::BLE_ATT_MTU,
        }),
        gatts_attr_tab_size: Some(raw::ble_gatts_cfg_attr_tab_size_t {
            attr_tab_size: raw::BLE_GATTS_ATTR_TAB_SIZE_DEFAULT,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: config::BLE_MAX_CONNECTIONS,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        gap_device_name: Some(raw::ble_gap_cfg_device_name_t {
            p_value: config::DEVICE_NAME.as_ptr() as _,
            current_len: config::DEVICE_NAME.len() as u16,
            max_len: config::DEVICE_NAME.len() as u16,
            write_perm: unsafe { mem::zeroed() },
            _bitfield_1: raw::ble_gap_cfg_device_name_t::new_bitfield_1(
                raw::BLE_GATTS_VLOC_STACK as u8,
            ),
        }),
        ..Default::default()
    }
}

#[embassy_executor::task]
pub async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

/// Advertise, serve one central, report the loss, wait to be re-armed.
#[embassy_executor::task]
pub async fn link_task(
    sd: &'static Softdevice,
    server: &'static Server,
    status: &'static LinkStatus,
) -> ! {
    loop {
        let adv = peripheral::ConnectableAdvertisement::ScannableUndirected {
            adv_data: &ADV_DATA,
            scan_data: &SCAN_DATA,
        };
        let conn = match peripheral::advertise_connectable(sd, adv, &peripheral::Config::default())
            .await
        {
            Ok(conn) => conn,
            Err(e) => {
                warn!("BLE: advertising failed: {:?}", e);
                Timer::after(Duration::from_millis(config::BLE_ADVERTISE_RETRY_MS)).await;
                continue;
            }
        };

        CONNECTION.lock(|c| c.replace(Some(conn.clone())));
        status.on_connect();
        info!("BLE: central connected");

        let reason = gatt_server::run(&conn, server, |e| match e {
            ServerEvent::Switch(e) => match e {
                SwitchServiceEvent::StateWrite(value) => {
                    info!("BLE: central wrote state = {}", value);
                }
                SwitchServiceEvent::StateCccdWrite {
                    indications,
                    notifications,
                } => {
                    info!(
                        "BLE: subscription notify={} indicate={}",
                        notifications, indications
                    );
                }
            },
        })
        .await;

        CONNECTION.lock(|c| c.replace(None));
        status.on_disconnect();
        info!("BLE: central disconnected: {:?}", reason);

        // Normally the main loop re-arms us within one period. A link that
        // came and went between two ticks is invisible to it, so give up
        // waiting after two periods.
        let grace = Duration::from_millis(config::LOOP_PERIOD_MS * 2);
        if let Either::Second(()) = select(ADVERTISE.wait(), Timer::after(grace)).await {
            warn!("BLE: no restart request seen, advertising anyway");
        }
    }
}
