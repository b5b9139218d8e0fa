use digipin_rs::{DigipinError, PinCell, decode};

fn main() -> Result<(), DigipinError> {
    // Dak Bhawan, New Delhi
    let lat = 28.6139;
    let lon = 77.2090;

    let cell = PinCell::from_latlon(lat, lon)?;

    println!("DIGIPIN: {}", cell.code);
    println!("Center: ({}, {})", cell.latitude(), cell.longitude());
    println!(
        "Cell span: {} x {} degrees",
        cell.lat_span(),
        cell.lon_span()
    );

    let (decoded_lat, decoded_lon) = decode(&cell.code)?;
    println!("Decoded: ({}, {})", decoded_lat, decoded_lon);

    let polygon = cell.to_polygon();
    println!("Polygon: {:?}", polygon);

    Ok(())
}
