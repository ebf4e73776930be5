// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{items::MenuItemCommandService, menus::MenuCommandService},
        ports::{routes::RouteResolver, time::Clock, util::SlugGenerator},
        queries::{menus::MenuQueryService, pages::PageQueryService, render::MenuRenderService},
    },
    domain::menu::{
        MenuItemRepository, MenuRepository,
        services::{ActivePathResolver, MenuUrlService},
    },
};

pub struct ApplicationServices {
    pub menu_commands: Arc<MenuCommandService>,
    pub item_commands: Arc<MenuItemCommandService>,
    pub menu_queries: Arc<MenuQueryService>,
    pub render_queries: Arc<MenuRenderService>,
    pub page_queries: Arc<PageQueryService>,
}

impl ApplicationServices {
    pub fn new(
        menu_repo: Arc<dyn MenuRepository>,
        item_repo: Arc<dyn MenuItemRepository>,
        routes: Arc<dyn RouteResolver>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let urls = Arc::new(MenuUrlService::new(
            Arc::clone(&routes),
            Arc::clone(&slugger),
        ));
        let resolver = Arc::new(ActivePathResolver::new(Arc::clone(&routes)));

        let menu_commands = Arc::new(MenuCommandService::new(
            Arc::clone(&menu_repo),
            Arc::clone(&slugger),
            Arc::clone(&clock),
        ));

        let item_commands = Arc::new(MenuItemCommandService::new(
            Arc::clone(&menu_repo),
            Arc::clone(&item_repo),
            Arc::clone(&urls),
            Arc::clone(&clock),
        ));

        let menu_queries = Arc::new(MenuQueryService::new(
            Arc::clone(&menu_repo),
            Arc::clone(&item_repo),
            Arc::clone(&urls),
        ));

        let render_queries = Arc::new(MenuRenderService::new(
            Arc::clone(&menu_repo),
            Arc::clone(&item_repo),
            Arc::clone(&resolver),
        ));

        let page_queries = Arc::new(PageQueryService::new(
            Arc::clone(&menu_repo),
            Arc::clone(&item_repo),
            Arc::clone(&routes),
            Arc::clone(&urls),
        ));

        Self {
            menu_commands,
            item_commands,
            menu_queries,
            render_queries,
            page_queries,
        }
    }
}
