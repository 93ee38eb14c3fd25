use crate::render::payload::MapPayload;

// Self-contained maps page. The payload already carries every color
// decision; the page only paints what it is told.
const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html>
<head>
  <title>Road Condition Map</title>
  <style>
    #map {
      height: 100%;
      width: 100%;
    }
    html, body {
      height: 100%;
      margin: 0;
      padding: 0;
    }
  </style>
</head>
<body>
  <div id="map"></div>
  <script>
    function initMap() {
      var map = new google.maps.Map(document.getElementById('map'), {
        zoom: 14,
        center: { lat: __CENTER_LAT__, lng: __CENTER_LON__ }
      });

      var pathData = __PATH_DATA__;
      var segmentColors = __SEGMENT_COLORS__;
      var routeData = __ROUTE_DATA__;

      // Start -> End guide line
      if (routeData.length === 2) {
        var routePath = routeData.map(function(pt) {
          return { lat: pt.lat, lng: pt.lon };
        });
        new google.maps.Polyline({
          path: routePath,
          geodesic: true,
          strokeColor: '#FF00FF',
          strokeOpacity: 0.8,
          strokeWeight: 6
        }).setMap(map);

        new google.maps.Marker({
          position: routePath[0],
          map: map,
          label: { text: "S", color: 'white' },
          icon: {
            path: google.maps.SymbolPath.BACKWARD_CLOSED_ARROW,
            scale: 5,
            fillColor: "#00BFFF",
            fillOpacity: 1,
            strokeWeight: 1,
            strokeColor: 'white'
          }
        });

        new google.maps.Marker({
          position: routePath[1],
          map: map,
          label: { text: "E", color: 'white' },
          icon: {
            path: google.maps.SymbolPath.FORWARD_CLOSED_ARROW,
            scale: 5,
            fillColor: "#FF1493",
            fillOpacity: 1,
            strokeWeight: 1,
            strokeColor: 'white'
          }
        });
      }

      // Traveled segments, one polyline per consecutive sample pair
      for (var i = 0; i < pathData.length - 1; i++) {
        new google.maps.Polyline({
          path: [
            { lat: pathData[i].lat, lng: pathData[i].lon },
            { lat: pathData[i + 1].lat, lng: pathData[i + 1].lon }
          ],
          geodesic: true,
          strokeColor: segmentColors[i],
          strokeOpacity: 1.0,
          strokeWeight: 7
        }).setMap(map);
      }

      // One labeled marker per sample
      for (var i = 0; i < pathData.length; i++) {
        var p = pathData[i];
        new google.maps.Marker({
          position: { lat: p.lat, lng: p.lon },
          map: map,
          label: {
            text: p.rating.toFixed(1),
            color: 'white'
          },
          icon: {
            path: google.maps.SymbolPath.CIRCLE,
            scale: 8,
            fillColor: p.color,
            fillOpacity: 1,
            strokeWeight: 1,
            strokeColor: 'white'
          }
        });
      }

      var bounds = new google.maps.LatLngBounds();
      if (routeData.length === 2) {
        bounds.extend(new google.maps.LatLng(routeData[0].lat, routeData[0].lon));
        bounds.extend(new google.maps.LatLng(routeData[1].lat, routeData[1].lon));
      }
      for (var i = 0; i < pathData.length; i++) {
        bounds.extend(new google.maps.LatLng(pathData[i].lat, pathData[i].lon));
      }
      if (routeData.length === 2 || pathData.length > 0) {
        map.fitBounds(bounds);
      }
    }
  </script>
  <script async
    src="https://maps.googleapis.com/maps/api/js?key=__API_KEY__&callback=initMap">
  </script>
</body>
</html>
"##;

pub fn map_page(api_key: &str, payload: &MapPayload) -> String {
    let path_json = serde_json::to_string(&payload.path).unwrap();
    let segment_colors_json = serde_json::to_string(&payload.segment_colors).unwrap();
    let route_json = serde_json::to_string(&payload.route).unwrap();

    PAGE_TEMPLATE
        .replace("__CENTER_LAT__", &payload.center.lat.to_string())
        .replace("__CENTER_LON__", &payload.center.lon.to_string())
        .replace("__PATH_DATA__", &path_json)
        .replace("__SEGMENT_COLORS__", &segment_colors_json)
        .replace("__ROUTE_DATA__", &route_json)
        .replace("__API_KEY__", api_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::geo::GeoPoint;
    use crate::data_types::route::Route;
    use crate::store::path_store::PathStore;

    fn sample_payload() -> MapPayload {
        let mut store = PathStore::new(Route::new(
            GeoPoint::new(-6.5539, 107.7597),
            GeoPoint::new(-6.5584, 107.7597),
            10,
        ));
        store.capture_next(1.0).unwrap();
        store.capture_next(9.0).unwrap();
        MapPayload::from_store(&store)
    }

    #[test]
    fn page_embeds_the_api_key_and_callback() {
        let page = map_page("test-key-123", &sample_payload());
        assert!(page.contains("key=test-key-123&callback=initMap"));
    }

    #[test]
    fn page_embeds_payload_data_as_json() {
        let page = map_page("k", &sample_payload());
        assert!(page.contains("\"rating\":1.0"));
        assert!(page.contains("\"color\":\"black\""));
        assert!(page.contains("\"lat\":-6.5539"));
    }

    #[test]
    fn every_template_marker_is_substituted() {
        let page = map_page("k", &sample_payload());
        assert!(!page.contains("__"));
    }

    #[test]
    fn page_keeps_the_route_and_endpoint_marker_palette() {
        let page = map_page("k", &sample_payload());
        assert!(page.contains("strokeColor: '#FF00FF'"));
        assert!(page.contains("fillColor: \"#00BFFF\""));
        assert!(page.contains("fillColor: \"#FF1493\""));
    }
}
