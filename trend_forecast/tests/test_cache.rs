use std::time::Duration;
use trend_forecast::cache::{cache_key, CacheStats, ResponseCache, TtlCache, DEFAULT_TTL};
use trend_forecast::series::TrendsTimeline;

/// Fetch through any cache, counting upstream calls
fn fetch_timeline<C: ResponseCache<String>>(
    cache: &mut C,
    country: &str,
    upstream_calls: &mut usize,
) -> TrendsTimeline {
    let key = cache_key("google_trends", &[("q", "acme"), ("geo", country)]);
    let body = match cache.get(&key) {
        Some(body) => body,
        None => {
            *upstream_calls += 1;
            let body = r#"{ "interest_over_time": { "timeline_data": [
                { "date": "Jan 15, 2023", "values": [{ "extracted_value": 10 }] },
                { "date": "Jan 22, 2023", "values": [{ "extracted_value": 20 }] }
            ] } }"#
                .to_string();
            cache.put(&key, body.clone(), DEFAULT_TTL);
            body
        }
    };
    TrendsTimeline::from_json_str(&body).unwrap()
}

#[test]
fn test_cached_responses_skip_upstream() {
    let mut cache = TtlCache::new();
    let mut calls = 0;

    let first = fetch_timeline(&mut cache, "ES", &mut calls);
    let second = fetch_timeline(&mut cache, "ES", &mut calls);
    fetch_timeline(&mut cache, "PT", &mut calls);

    assert_eq!(calls, 2);
    assert_eq!(first.observations(), second.observations());
    assert_eq!(cache.len(), 2);
    assert_eq!(
        cache.stats(),
        CacheStats {
            hits: 1,
            misses: 2,
            entries: 2,
        }
    );
}

#[test]
fn test_purge_expired() {
    let mut cache = TtlCache::new();
    cache.put("stale", 1, Duration::ZERO);
    cache.put("fresh", 2, DEFAULT_TTL);

    assert_eq!(cache.purge_expired(), 1);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.get("fresh"), Some(2));
}

#[test]
fn test_key_is_order_independent() {
    let a = cache_key("google_news", &[("gl", "es"), ("hl", "es"), ("q", "acme")]);
    let b = cache_key("google_news", &[("q", "acme"), ("hl", "es"), ("gl", "es")]);
    assert_eq!(a, b);
}
