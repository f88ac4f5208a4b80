use axum::{
    routing::{delete, get, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{album, arena, auth, banner, city, event, info, news, photo, player, team},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Clubhouse API", description = "Multi-tenant sports club management"),
    paths(
        auth::get_user,
        auth::logout,
        city::create_city,
        city::get_cities,
        city::get_city,
        city::update_city,
        city::delete_city,
        team::create_team,
        team::get_teams,
        team::get_team,
        team::update_team,
        team::delete_team,
        arena::create_arena,
        arena::get_arenas,
        arena::get_arena,
        arena::update_arena,
        arena::delete_arena,
        player::create_player,
        player::get_players,
        player::get_player,
        player::update_player,
        player::delete_player,
        player::get_public_players,
        player::get_public_player,
        banner::create_banner,
        banner::get_banners,
        banner::get_banner,
        banner::update_banner,
        banner::delete_banner,
        banner::get_public_banners,
        info::create_info,
        info::get_info_list,
        info::get_info,
        info::update_info,
        info::delete_info,
        info::get_public_info,
        album::create_album,
        album::get_albums,
        album::update_album,
        album::set_main_album,
        album::delete_album,
        photo::upload_photos,
        photo::get_photos,
        photo::reorder_photos,
        photo::move_photo,
        photo::delete_photo,
        news::create_news,
        news::get_news_list,
        news::get_news,
        news::update_news,
        news::pin_news,
        news::delete_news,
        event::create_event,
        event::get_events,
        event::get_event,
        event::update_event,
        event::delete_event,
    ),
    tags(
        (name = "auth", description = "Session user"),
        (name = "city", description = "Cities shared between teams"),
        (name = "team", description = "Teams by city"),
        (name = "arena", description = "Arenas by city"),
        (name = "player", description = "Team roster"),
        (name = "banner", description = "Ordered banners of the team site"),
        (name = "info", description = "Ordered info articles"),
        (name = "album", description = "Photo albums"),
        (name = "photo", description = "Photos and their order within an album"),
        (name = "news", description = "News articles"),
        (name = "event", description = "Games and trainings"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/cities", get(city::get_cities).post(city::create_city))
        .route(
            "/api/cities/{id}",
            get(city::get_city)
                .put(city::update_city)
                .delete(city::delete_city),
        )
        .route("/api/teams", get(team::get_teams).post(team::create_team))
        .route(
            "/api/teams/{id}",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
        .route("/api/arenas", get(arena::get_arenas).post(arena::create_arena))
        .route(
            "/api/arenas/{id}",
            get(arena::get_arena)
                .put(arena::update_arena)
                .delete(arena::delete_arena),
        )
        .route(
            "/api/players",
            get(player::get_players).post(player::create_player),
        )
        .route(
            "/api/players/{id}",
            get(player::get_player)
                .put(player::update_player)
                .delete(player::delete_player),
        )
        .route(
            "/api/banners",
            get(banner::get_banners).post(banner::create_banner),
        )
        .route(
            "/api/banners/{id}",
            get(banner::get_banner)
                .put(banner::update_banner)
                .delete(banner::delete_banner),
        )
        .route("/api/info", get(info::get_info_list).post(info::create_info))
        .route(
            "/api/info/{id}",
            get(info::get_info)
                .put(info::update_info)
                .delete(info::delete_info),
        )
        .route("/api/albums", get(album::get_albums).post(album::create_album))
        .route(
            "/api/albums/{id}",
            put(album::update_album).delete(album::delete_album),
        )
        .route("/api/albums/{id}/main", put(album::set_main_album))
        .route(
            "/api/albums/{id}/photos",
            get(photo::get_photos).post(photo::upload_photos),
        )
        .route(
            "/api/albums/{id}/photos/positions",
            put(photo::reorder_photos),
        )
        .route("/api/photos/{id}/album", put(photo::move_photo))
        .route("/api/photos/{id}", delete(photo::delete_photo))
        .route("/api/news", get(news::get_news_list).post(news::create_news))
        .route(
            "/api/news/{id}",
            get(news::get_news)
                .put(news::update_news)
                .delete(news::delete_news),
        )
        .route("/api/news/{id}/pin", put(news::pin_news))
        .route("/api/events", get(event::get_events).post(event::create_event))
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route(
            "/api/public/teams/{team_id}/players",
            get(player::get_public_players),
        )
        .route("/api/public/players/{id}", get(player::get_public_player))
        .route(
            "/api/public/teams/{team_id}/banners",
            get(banner::get_public_banners),
        )
        .route(
            "/api/public/teams/{team_id}/info",
            get(info::get_public_info),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}
