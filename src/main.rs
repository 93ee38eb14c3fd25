use road_rated::config::DashboardConfig;
use road_rated::processors::buckets::ColorBucketer;
use road_rated::Session;

fn main() {
    let config = DashboardConfig::load();
    let mut session = Session::new(&config);

    let route = *session.current_route();
    println!(
        "Surveying ({:.5}, {:.5}) -> ({:.5}, {:.5}) over {} segments",
        route.start.lat, route.start.lon, route.end.lat, route.end.lon, route.segment_count
    );

    while session.remaining_segments() > 0 {
        match session.capture_next() {
            Ok(sample) => println!(
                "  {:>2}. ({:.6}, {:.6}) rated {:.1} ({})",
                session.captured_count(),
                sample.point.lat,
                sample.point.lon,
                sample.rating,
                ColorBucketer::bucket(sample.rating)
            ),
            Err(err) => {
                println!("Capture stopped: {}", err);
                break;
            }
        }
    }

    let payload = session.map_payload();
    println!("{}", serde_json::to_string_pretty(&payload).unwrap());
}
