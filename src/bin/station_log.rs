//! Small end-to-end demo: pick the first station of the account, fetch its
//! metadata and current conditions, and append the flattened reading to a
//! JSON-lines log.
//!
//! Requires `WEATHERLINK_API_KEY` and `WEATHERLINK_API_SECRET` in the
//! environment.

use weatherlink::{flatten_current, JsonlLog, Weatherlink};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = Weatherlink::from_env()?;

    let stations = client.get_stations().await?;
    if stations.is_empty() {
        eprintln!("No station found - check the API key.");
        return Ok(());
    }
    for station in &stations {
        println!(
            "{} (id {}, {:?}): {}",
            station.station_name,
            station.station_id,
            station.subscription_type,
            station.station_id_uuid
        );
    }
    let station = &stations[0];

    // Metadata, activity and the current reading share no state, so they can
    // be fetched concurrently.
    let (sensors, activity, current) = tokio::try_join!(
        client.get_sensors(),
        client.get_sensor_activity(),
        client.get_current(station.station_id_uuid.as_str()),
    )?;

    println!("\n{} sensors:", sensors.len());
    for sensor in &sensors {
        println!(
            "  lsid {} type {} {}",
            sensor.lsid,
            sensor.sensor_type,
            sensor.product_name.as_deref().unwrap_or("-")
        );
    }
    let now = chrono::Utc::now().timestamp();
    for a in &activity {
        println!("  sensor {} last pushed {} min ago", a.lsid, (now - a.time_received) / 60);
    }

    match current {
        Some(payload) => {
            let row = flatten_current(&payload);
            let mut log = JsonlLog::open("logs/current.jsonl").await?;
            log.append(&row).await?;
            println!(
                "\nAppended current reading ({} fields) to {}",
                row.fields.len(),
                log.path().display()
            );
        }
        None => println!("\nNo current dataset available for this subscription."),
    }

    Ok(())
}
