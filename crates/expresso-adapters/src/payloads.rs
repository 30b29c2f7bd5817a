//! Embedded skeleton payloads.
//!
//! Each entry is `(key, text)`; keys match the resource catalog in
//! `expresso-core`. Template payloads carry `{{name}}` slots filled by the
//! raw renderer; everything else is copied verbatim into the generated
//! project.

/// Entrypoint template, JavaScript variant.
const APP_JS: &str = r#"require('dotenv').config();

var express = require('express');
var path = require('path');
{{module_imports}}

{{db_init}}

{{cache_init}}

var app = express();

{{view_setup}}

{{uses}}
app.use(express.static(path.join(__dirname, '../public')));

{{mounts}}

module.exports = app;
"#;

/// Entrypoint template, TypeScript variant.
const APP_TS: &str = r#"import dotenv from 'dotenv';
import express from 'express';
import path from 'path';
{{module_imports}}

dotenv.config();

{{db_init}}

{{cache_init}}

const app = express();

{{uses}}
app.use(express.static(path.join(__dirname, '../public')));

{{mounts}}

export default app;
"#;

const WWW_JS: &str = r#"#!/usr/bin/env node

var app = require('../app');

var PORT = process.env.PORT || 3000;

{{boot_db}}
"#;

const WWW_TS: &str = r#"#!/usr/bin/env node

import app from '../app';

const PORT = process.env.PORT || 3000;

{{boot_db}}
"#;

const ENV: &str = r#"PORT=3000
{{env_lines}}
"#;

const ESLINTRC: &str = r#"{
  "env": {
    "es6": true,
    "node": true
  },
  "parserOptions": {
    "ecmaVersion": 2018,
    "sourceType": "module"
  },
  "extends": "eslint:recommended",
  "rules": {
    "no-console": "off"
  }
}
"#;

const BABELRC: &str = r#"{
  "presets": ["@babel/preset-env"]
}
"#;

const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "es2017",
    "module": "commonjs",
    "outDir": "./dist",
    "rootDir": "./server",
    "strict": true,
    "esModuleInterop": true,
    "resolveJsonModule": true,
    "skipLibCheck": true
  },
  "include": ["server/**/*"]
}
"#;

const GITIGNORE: &str = r#"node_modules/
dist/
.env
npm-debug.log*
*.log
.DS_Store
"#;

// ── Routes and controllers ────────────────────────────────────────────────────

const ROUTES_INDEX_VIEW_JS: &str = r#"var express = require('express');
var router = express.Router();

router.get('/', function (req, res) {
  res.render('index', { title: 'Express' });
});

module.exports = router;
"#;

const ROUTES_INDEX_API_JS: &str = r#"var express = require('express');
var controller = require('../controllers/index');
var router = express.Router();

router.get('/', controller.index);

module.exports = router;
"#;

const ROUTES_INDEX_API_TS: &str = r#"import express from 'express';
import controller from '../controllers/index';

const router = express.Router();

router.get('/', controller.index);

export default router;
"#;

const ROUTES_USERS_JS: &str = r#"var express = require('express');
var router = express.Router();

router.get('/', function (req, res) {
  res.json({ users: [] });
});

module.exports = router;
"#;

const ROUTES_USERS_TS: &str = r#"import express from 'express';

const router = express.Router();

router.get('/', (req, res) => {
  res.json({ users: [] });
});

export default router;
"#;

const CONTROLLERS_INDEX_JS: &str = r#"exports.index = function (req, res) {
  res.json({ message: 'API is running' });
};
"#;

const CONTROLLERS_INDEX_TS: &str = r#"import { Request, Response } from 'express';

const index = (req: Request, res: Response): void => {
  res.json({ message: 'API is running' });
};

export default { index };
"#;

// ── Models ────────────────────────────────────────────────────────────────────

const MONGOOSE_ITEM_JS: &str = r#"var mongoose = require('mongoose');

var ItemSchema = new mongoose.Schema({
  name: { type: String, required: true },
  createdAt: { type: Date, default: Date.now }
});

module.exports = mongoose.model('Item', ItemSchema);
"#;

const MONGOOSE_ITEM_TS: &str = r#"import mongoose from 'mongoose';

const ItemSchema = new mongoose.Schema({
  name: { type: String, required: true },
  createdAt: { type: Date, default: Date.now }
});

export default mongoose.model('Item', ItemSchema);
"#;

const SEQUELIZE_INDEX_JS: &str = r#"var fs = require('fs');
var path = require('path');
var Sequelize = require('sequelize');

var env = process.env.NODE_ENV || 'development';
var config = require(path.join(__dirname, '../config/config.json'))[env];

var sequelize = config.use_env_variable
  ? new Sequelize(process.env[config.use_env_variable], config)
  : new Sequelize(config.database, config.username, config.password, config);

var db = { sequelize: sequelize, Sequelize: Sequelize };

fs.readdirSync(__dirname)
  .filter(function (file) {
    return file !== 'index.js' && file.slice(-3) === '.js';
  })
  .forEach(function (file) {
    var model = sequelize.import(path.join(__dirname, file));
    db[model.name] = model;
  });

module.exports = db;
"#;

const SEQUELIZE_INDEX_TS: &str = r#"import Sequelize from 'sequelize';
import * as configs from '../config/config.json';

const env = process.env.NODE_ENV || 'development';
const config = (configs as Record<string, any>)[env];

const sequelize = config.use_env_variable
  ? new Sequelize(process.env[config.use_env_variable] as string, config)
  : new Sequelize(config.database, config.username, config.password, config);

const db = { sequelize, Sequelize };

export default db;
"#;

const SEQUELIZE_ITEM_JS: &str = r#"module.exports = function (sequelize, DataTypes) {
  var Item = sequelize.define('Item', {
    name: { type: DataTypes.STRING, allowNull: false }
  });
  return Item;
};
"#;

const SEQUELIZE_ITEM_TS: &str = r#"import { Sequelize, DataTypes } from 'sequelize';

export default (sequelize: Sequelize) =>
  sequelize.define('Item', {
    name: { type: DataTypes.STRING, allowNull: false }
  });
"#;

const SEQUELIZE_CONFIG: &str = r#"{
  "development": {
    "username": "root",
    "password": "password",
    "database": "mydb",
    "host": "127.0.0.1",
    "dialect": "mysql"
  },
  "test": {
    "username": "root",
    "password": "password",
    "database": "mydb_test",
    "host": "127.0.0.1",
    "dialect": "mysql"
  },
  "production": {
    "use_env_variable": "DATABASE_URL",
    "dialect": "mysql"
  }
}
"#;

// ── View partials ─────────────────────────────────────────────────────────────

const INDEX_DUST: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>{title}</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>{title}</h1>
    <p>Welcome to {title}</p>
  </body>
</html>
"#;

const ERROR_DUST: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Error</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>{message}</h1>
    <h2>{error.status}</h2>
    <pre>{error.stack}</pre>
  </body>
</html>
"#;

const INDEX_EJS: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title><%= title %></title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1><%= title %></h1>
    <p>Welcome to <%= title %></p>
  </body>
</html>
"#;

const ERROR_EJS: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Error</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1><%= message %></h1>
    <h2><%= error.status %></h2>
    <pre><%= error.stack %></pre>
  </body>
</html>
"#;

const INDEX_HBS: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>{{title}}</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>{{title}}</h1>
    <p>Welcome to {{title}}</p>
  </body>
</html>
"#;

const ERROR_HBS: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Error</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>{{message}}</h1>
    <h2>{{error.status}}</h2>
    <pre>{{error.stack}}</pre>
  </body>
</html>
"#;

const INDEX_HJS: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>{{ title }}</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>{{ title }}</h1>
    <p>Welcome to {{ title }}</p>
  </body>
</html>
"#;

const ERROR_HJS: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Error</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>{{ message }}</h1>
    <h2>{{ error.status }}</h2>
    <pre>{{ error.stack }}</pre>
  </body>
</html>
"#;

const INDEX_PUG: &str = r#"doctype html
html
  head
    title= title
    link(rel='stylesheet', href='/stylesheets/style.css')
  body
    h1= title
    p Welcome to #{title}
"#;

const ERROR_PUG: &str = r#"doctype html
html
  head
    title Error
    link(rel='stylesheet', href='/stylesheets/style.css')
  body
    h1= message
    h2= error.status
    pre #{error.stack}
"#;

const INDEX_TWIG: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>{{ title }}</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>{{ title }}</h1>
    <p>Welcome to {{ title }}</p>
  </body>
</html>
"#;

const ERROR_TWIG: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Error</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>{{ message }}</h1>
    <h2>{{ error.status }}</h2>
    <pre>{{ error.stack }}</pre>
  </body>
</html>
"#;

const INDEX_VASH: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>@model.title</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>@model.title</h1>
    <p>Welcome to @model.title</p>
  </body>
</html>
"#;

const ERROR_VASH: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <title>Error</title>
    <link rel="stylesheet" href="/stylesheets/style.css">
  </head>
  <body>
    <h1>@model.message</h1>
    <h2>@model.error.status</h2>
    <pre>@model.error.stack</pre>
  </body>
</html>
"#;

// ── Stylesheets ───────────────────────────────────────────────────────────────

const STYLE_CSS: &str = r#"body {
  padding: 50px;
  font: 14px "Lucida Grande", Helvetica, Arial, sans-serif;
}

a {
  color: #00b7ff;
}
"#;

const STYLE_LESS: &str = r#"@link-color: #00b7ff;

body {
  padding: 50px;
  font: 14px "Lucida Grande", Helvetica, Arial, sans-serif;
}

a {
  color: @link-color;
}
"#;

const STYLE_SASS: &str = r#"$link-color: #00b7ff

body
  padding: 50px
  font: 14px "Lucida Grande", Helvetica, Arial, sans-serif

a
  color: $link-color
"#;

const STYLE_STYL: &str = r#"link-color = #00b7ff

body
  padding: 50px
  font: 14px "Lucida Grande", Helvetica, Arial, sans-serif

a
  color: link-color
"#;

const STYLE_SCSS: &str = r#"$link-color: #00b7ff;

body {
  padding: 50px;
  font: 14px "Lucida Grande", Helvetica, Arial, sans-serif;
}

a {
  color: $link-color;
}
"#;

/// The full payload table, keyed to match the resource catalog.
pub const PAYLOADS: &[(&str, &str)] = &[
    ("app.js", APP_JS),
    ("app.ts", APP_TS),
    ("www.js", WWW_JS),
    ("www.ts", WWW_TS),
    ("env", ENV),
    ("eslintrc.json", ESLINTRC),
    ("babelrc", BABELRC),
    ("tsconfig.json", TSCONFIG),
    ("gitignore", GITIGNORE),
    ("routes/index-view.js", ROUTES_INDEX_VIEW_JS),
    ("routes/index-api.js", ROUTES_INDEX_API_JS),
    ("routes/index-api.ts", ROUTES_INDEX_API_TS),
    ("routes/users.js", ROUTES_USERS_JS),
    ("routes/users.ts", ROUTES_USERS_TS),
    ("controllers/index.js", CONTROLLERS_INDEX_JS),
    ("controllers/index.ts", CONTROLLERS_INDEX_TS),
    ("models/mongoose/item.js", MONGOOSE_ITEM_JS),
    ("models/mongoose/item.ts", MONGOOSE_ITEM_TS),
    ("models/sequelize/index.js", SEQUELIZE_INDEX_JS),
    ("models/sequelize/index.ts", SEQUELIZE_INDEX_TS),
    ("models/sequelize/item.js", SEQUELIZE_ITEM_JS),
    ("models/sequelize/item.ts", SEQUELIZE_ITEM_TS),
    ("config/config.json", SEQUELIZE_CONFIG),
    ("views/index.dust", INDEX_DUST),
    ("views/error.dust", ERROR_DUST),
    ("views/index.ejs", INDEX_EJS),
    ("views/error.ejs", ERROR_EJS),
    ("views/index.hbs", INDEX_HBS),
    ("views/error.hbs", ERROR_HBS),
    ("views/index.hjs", INDEX_HJS),
    ("views/error.hjs", ERROR_HJS),
    ("views/index.pug", INDEX_PUG),
    ("views/error.pug", ERROR_PUG),
    ("views/index.twig", INDEX_TWIG),
    ("views/error.twig", ERROR_TWIG),
    ("views/index.vash", INDEX_VASH),
    ("views/error.vash", ERROR_VASH),
    ("stylesheets/style.css", STYLE_CSS),
    ("stylesheets/style.less", STYLE_LESS),
    ("stylesheets/style.sass", STYLE_SASS),
    ("stylesheets/style.styl", STYLE_STYL),
    ("stylesheets/style.scss", STYLE_SCSS),
];
