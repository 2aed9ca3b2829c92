// src/repositories/movie_repository_tests.rs
//
// Emission sequences of RemoteMovieRepository against a mocked transport.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tokio::time::Instant;
    use tokio_util::sync::CancellationToken;

    use crate::config::EmptyBodyPolicy;
    use crate::domain::{Movie, Resource};
    use crate::error::{
        AppError, AppResult, TransportError, CONNECTIVITY_FAILURE_MSG, REMOTE_SERVICE_FAILURE_MSG,
    };
    use crate::integrations::tmdb::{
        mapper, CatalogRequest, CatalogTransport, MockCatalogTransport,
    };
    use crate::repositories::{
        FetchOptions, MovieCacheRepository, MovieRepository, RemoteMovieRepository,
    };

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn movie_json(id: i64, title: &str) -> Value {
        json!({
            "id": id,
            "title": title,
            "original_title": title,
            "original_language": "en",
            "overview": "",
            "poster_path": null,
            "backdrop_path": null,
            "genre_ids": [],
            "release_date": "2022-02-02",
            "popularity": 1.0,
            "vote_average": 6.5,
            "vote_count": 3,
            "adult": false,
            "video": false
        })
    }

    fn two_movies_page() -> Value {
        json!({
            "page": 1,
            "results": [movie_json(1, "First"), movie_json(2, "Second")],
            "total_pages": 1,
            "total_results": 2
        })
    }

    /// Transport that answers `path` with `answer` and fails the test for anything else
    fn transport_for(
        path: &'static str,
        answer: Result<Option<Value>, TransportError>,
    ) -> MockCatalogTransport {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_execute()
            .withf(move |request| request.endpoint.path() == path)
            .returning(move |_| answer.clone());
        transport
    }

    fn repository(transport: MockCatalogTransport) -> RemoteMovieRepository {
        RemoteMovieRepository::new(Arc::new(transport), FetchOptions::default())
    }

    /// Transport that takes `delay` before answering with a page
    struct SlowTransport {
        delay: Duration,
    }

    #[async_trait]
    impl CatalogTransport for SlowTransport {
        async fn execute(
            &self,
            _request: &CatalogRequest,
        ) -> Result<Option<Value>, TransportError> {
            tokio::time::sleep(self.delay).await;
            Ok(Some(two_movies_page()))
        }
    }

    #[derive(Default)]
    struct InMemoryCache {
        pages: Mutex<HashMap<(String, u32), Vec<Movie>>>,
    }

    impl MovieCacheRepository for InMemoryCache {
        fn save_movies(&self, category: &str, page: u32, movies: &[Movie]) -> AppResult<()> {
            self.pages
                .lock()
                .unwrap()
                .insert((category.to_string(), page), movies.to_vec());
            Ok(())
        }

        fn get_movies(&self, category: &str, page: u32) -> AppResult<Option<Vec<Movie>>> {
            Ok(self
                .pages
                .lock()
                .unwrap()
                .get(&(category.to_string(), page))
                .cloned())
        }

        fn clear(&self) -> AppResult<()> {
            self.pages.lock().unwrap().clear();
            Ok(())
        }
    }

    // ========================================================================
    // SUCCESS PATH
    // ========================================================================

    #[tokio::test]
    async fn test_list_by_category_emits_loading_then_success() {
        let transport = transport_for("/movie/popular", Ok(Some(two_movies_page())));
        let repo = repository(transport);
        let mut sink = Vec::new();

        repo.get_movies("popular", 1, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        let expected = mapper::to_movies(two_movies_page()).unwrap().movies;
        assert_eq!(sink, vec![Resource::Loading, Resource::success(expected)]);
        let movies = sink[1].data().unwrap();
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[1].id, 2);
    }

    #[tokio::test]
    async fn test_list_by_category_sends_page() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.endpoint.path() == "/movie/top_rated" && request.page == Some(3))
            .times(1)
            .returning(|_| Ok(Some(two_movies_page())));

        let mut sink = Vec::new();
        repository(transport)
            .get_movies("top_rated", 3, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        assert_eq!(sink.len(), 2);
    }

    #[tokio::test]
    async fn test_every_detail_operation_maps_its_body() {
        let token = CancellationToken::new();

        let detail = json!({ "id": 42, "title": "Detail", "genres": [] });
        let repo = repository(transport_for("/movie/42", Ok(Some(detail))));
        let mut sink = Vec::new();
        repo.get_movie_detail(42, &token, &mut sink).await.unwrap();
        assert_eq!(sink[1].data().unwrap().title, "Detail");

        let repo = repository(transport_for("/movie/42/similar", Ok(Some(two_movies_page()))));
        let mut sink = Vec::new();
        repo.get_similar_movies(42, 1, &token, &mut sink).await.unwrap();
        assert_eq!(sink[1].data().unwrap().len(), 2);

        let repo = repository(transport_for(
            "/movie/42/recommendations",
            Ok(Some(two_movies_page())),
        ));
        let mut sink = Vec::new();
        repo.get_recommended_movies(42, 1, &token, &mut sink)
            .await
            .unwrap();
        assert_eq!(sink[1].data().unwrap()[1].title, "Second");

        let videos = json!({ "id": 42, "results": [{ "id": "v", "key": "k", "site": "YouTube", "type": "Teaser" }] });
        let repo = repository(transport_for("/movie/42/videos", Ok(Some(videos))));
        let mut sink = Vec::new();
        repo.get_movie_videos(42, &token, &mut sink).await.unwrap();
        assert_eq!(sink[1].data().unwrap()[0].kind, "Teaser");

        let reviews = json!({ "page": 1, "results": [{ "id": "r", "author": "a", "author_details": { "username": "a" } }] });
        let repo = repository(transport_for("/movie/42/reviews", Ok(Some(reviews))));
        let mut sink = Vec::new();
        repo.get_movie_reviews(42, &token, &mut sink).await.unwrap();
        assert_eq!(sink[1].data().unwrap()[0].author, "a");

        let credits = json!({ "id": 42, "cast": [], "crew": [] });
        let repo = repository(transport_for("/movie/42/credits", Ok(Some(credits))));
        let mut sink = Vec::new();
        repo.get_movie_credits(42, &token, &mut sink).await.unwrap();
        assert_eq!(sink[1].data().unwrap().id, 42);

        let images = json!({ "id": 42, "backdrops": [], "posters": [{ "file_path": "/p.jpg" }], "logos": [] });
        let repo = repository(transport_for("/movie/42/images", Ok(Some(images))));
        let mut sink = Vec::new();
        repo.get_movie_images(42, &token, &mut sink).await.unwrap();
        assert_eq!(sink[1].data().unwrap().posters[0].file_path, "/p.jpg");
    }

    #[tokio::test]
    async fn test_same_call_twice_yields_equal_sequences() {
        let transport = transport_for("/movie/popular", Ok(Some(two_movies_page())));
        let repo = repository(transport);
        let token = CancellationToken::new();

        let mut first = Vec::new();
        let mut second = Vec::new();
        repo.get_movies("popular", 1, &token, &mut first).await.unwrap();
        repo.get_movies("popular", 1, &token, &mut second).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    // ========================================================================
    // FAILURE TRANSLATION
    // ========================================================================

    #[tokio::test]
    async fn test_detail_protocol_failure_emits_remote_service_message() {
        let transport = transport_for("/movie/42", Err(TransportError::Protocol { status: 404 }));
        let mut sink = Vec::new();

        repository(transport)
            .get_movie_detail(42, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        assert_eq!(
            sink,
            vec![Resource::Loading, Resource::error(REMOTE_SERVICE_FAILURE_MSG)]
        );
    }

    #[tokio::test]
    async fn test_protocol_message_is_independent_of_status() {
        for status in [400, 401, 404, 500, 503] {
            let transport = transport_for("/movie/1/credits", Err(TransportError::Protocol { status }));
            let mut sink = Vec::new();

            repository(transport)
                .get_movie_credits(1, &CancellationToken::new(), &mut sink)
                .await
                .unwrap();

            assert_eq!(sink[1].message(), Some(REMOTE_SERVICE_FAILURE_MSG));
        }
    }

    #[tokio::test]
    async fn test_videos_connectivity_failure_emits_connectivity_message() {
        let transport = transport_for(
            "/movie/7/videos",
            Err(TransportError::Connectivity("network unreachable".to_string())),
        );
        let mut sink = Vec::new();

        repository(transport)
            .get_movie_videos(7, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        assert_eq!(
            sink,
            vec![Resource::Loading, Resource::error(CONNECTIVITY_FAILURE_MSG)]
        );
    }

    #[tokio::test]
    async fn test_empty_body_ends_after_loading_by_default() {
        let transport = transport_for("/movie/42/images", Ok(None));
        let mut sink = Vec::new();

        repository(transport)
            .get_movie_images(42, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        assert_eq!(sink, vec![Resource::Loading]);
    }

    #[tokio::test]
    async fn test_empty_body_can_emit_error() {
        let transport = transport_for("/movie/42/images", Ok(None));
        let repo = RemoteMovieRepository::new(
            Arc::new(transport),
            FetchOptions {
                empty_body: EmptyBodyPolicy::EmitError,
            },
        );
        let mut sink = Vec::new();

        repo.get_movie_images(42, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        assert_eq!(
            sink,
            vec![Resource::Loading, Resource::error(REMOTE_SERVICE_FAILURE_MSG)]
        );
    }

    #[tokio::test]
    async fn test_mapper_failure_propagates_without_terminal_value() {
        let transport = transport_for("/movie/42", Ok(Some(json!({ "title": "no id" }))));
        let mut sink = Vec::new();

        let result = repository(transport)
            .get_movie_detail(42, &CancellationToken::new(), &mut sink)
            .await;

        assert!(matches!(result, Err(AppError::Serialization(_))));
        assert_eq!(sink, vec![Resource::Loading]);
    }

    #[tokio::test]
    async fn test_null_fields_in_a_page_still_map() {
        let page = json!({
            "page": 1,
            "results": [{ "id": 1, "title": null, "vote_count": null, "genre_ids": null }],
            "total_pages": 1,
            "total_results": 1
        });
        let transport = transport_for("/movie/popular", Ok(Some(page)));
        let mut sink = Vec::new();

        repository(transport)
            .get_movies("popular", 1, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        assert_eq!(sink.len(), 2);
        let movies = sink[1].data().unwrap();
        assert_eq!(movies[0].id, 1);
        assert_eq!(movies[0].title, "");
        assert_eq!(movies[0].vote_count, 0);
    }

    #[tokio::test]
    async fn test_category_outside_one_path_segment_is_rejected() {
        let mut transport = MockCatalogTransport::new();
        transport.expect_execute().times(0);
        let mut sink = Vec::new();

        let result = repository(transport)
            .get_movies("../42/videos", 1, &CancellationToken::new(), &mut sink)
            .await;

        assert!(matches!(
            result,
            Err(AppError::Transport(TransportError::InvalidRequest(_)))
        ));
        assert_eq!(sink, vec![Resource::Loading]);
    }

    #[tokio::test]
    async fn test_malformed_transport_body_propagates() {
        let transport = transport_for(
            "/movie/42/reviews",
            Err(TransportError::Malformed("expected value".to_string())),
        );
        let mut sink = Vec::new();

        let result = repository(transport)
            .get_movie_reviews(42, &CancellationToken::new(), &mut sink)
            .await;

        assert!(matches!(
            result,
            Err(AppError::Transport(TransportError::Malformed(_)))
        ));
        assert_eq!(sink, vec![Resource::Loading]);
    }

    // ========================================================================
    // CANCELLATION
    // ========================================================================

    #[tokio::test]
    async fn test_cancelled_fetch_emits_only_loading() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_execute()
            .times(0..=1)
            .returning(|_| Ok(Some(json!({ "id": 42 }))));

        let token = CancellationToken::new();
        token.cancel();
        let mut sink = Vec::new();

        repository(transport)
            .get_movie_detail(42, &token, &mut sink)
            .await
            .unwrap();

        assert_eq!(sink, vec![Resource::Loading]);
    }

    #[tokio::test]
    async fn test_cancel_during_request_suppresses_terminal_value() {
        let repo = RemoteMovieRepository::new(
            Arc::new(SlowTransport {
                delay: Duration::from_millis(200),
            }),
            FetchOptions::default(),
        );
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            canceller.cancel();
        });

        let started = Instant::now();
        let mut sink = Vec::new();
        repo.get_movies("popular", 1, &token, &mut sink)
            .await
            .unwrap();

        assert_eq!(sink, vec![Resource::Loading]);
        // The request was abandoned, not awaited to completion
        assert!(started.elapsed() < Duration::from_millis(200));
    }

    // ========================================================================
    // LOCAL STORE
    // ========================================================================

    #[tokio::test]
    async fn test_successful_page_is_written_through() {
        let cache = Arc::new(InMemoryCache::default());
        let transport = transport_for("/movie/popular", Ok(Some(two_movies_page())));
        let repo = repository(transport).with_cache(cache.clone(), false);

        let mut sink = Vec::new();
        repo.get_movies("popular", 1, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        let cached = cache.get_movies("popular", 1).unwrap().unwrap();
        assert_eq!(Some(&cached), sink[1].data());
    }

    #[tokio::test]
    async fn test_offline_fallback_serves_cached_page() {
        let cache = Arc::new(InMemoryCache::default());
        let cached = mapper::to_movies(two_movies_page()).unwrap().movies;
        cache.save_movies("popular", 1, &cached).unwrap();

        let transport = transport_for(
            "/movie/popular",
            Err(TransportError::Connectivity("offline".to_string())),
        );
        let repo = repository(transport).with_cache(cache, true);

        let mut sink = Vec::new();
        repo.get_movies("popular", 1, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        assert_eq!(sink, vec![Resource::Loading, Resource::success(cached)]);
    }

    #[tokio::test]
    async fn test_offline_without_cached_page_still_errors() {
        let cache = Arc::new(InMemoryCache::default());
        let transport = transport_for(
            "/movie/popular",
            Err(TransportError::Connectivity("offline".to_string())),
        );
        let repo = repository(transport).with_cache(cache, true);

        let mut sink = Vec::new();
        repo.get_movies("popular", 1, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();

        assert_eq!(sink[1].message(), Some(CONNECTIVITY_FAILURE_MSG));
    }

    #[tokio::test]
    async fn test_cache_is_not_consulted_without_fallback_or_on_protocol_failure() {
        let cache = Arc::new(InMemoryCache::default());
        cache
            .save_movies("popular", 1, &mapper::to_movies(two_movies_page()).unwrap().movies)
            .unwrap();

        let transport = transport_for(
            "/movie/popular",
            Err(TransportError::Connectivity("offline".to_string())),
        );
        let repo = repository(transport).with_cache(cache.clone(), false);
        let mut sink = Vec::new();
        repo.get_movies("popular", 1, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();
        assert_eq!(sink[1].message(), Some(CONNECTIVITY_FAILURE_MSG));

        let transport = transport_for("/movie/popular", Err(TransportError::Protocol { status: 500 }));
        let repo = repository(transport).with_cache(cache, true);
        let mut sink = Vec::new();
        repo.get_movies("popular", 1, &CancellationToken::new(), &mut sink)
            .await
            .unwrap();
        assert_eq!(sink[1].message(), Some(REMOTE_SERVICE_FAILURE_MSG));
    }
}
